//! Dominant-colour fallback classifier
//!
//! Buckets every sampled pixel, then maps the most common bucket to a fixed
//! (label, confidence) guess. Crude, but it always produces something
//! nature-flavoured when the cloud classifier is unavailable.

use crate::types::{DetectionResult, DetectionSource, Rgb};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Green,
    Blue,
    Brown,
    Yellow,
    Red,
    White,
    Gray,
    Dark,
    Mixed,
}

impl ColorBucket {
    /// Tie-break order for the dominant bucket
    pub const ALL: [ColorBucket; 9] = [
        ColorBucket::Green,
        ColorBucket::Blue,
        ColorBucket::Brown,
        ColorBucket::Yellow,
        ColorBucket::Red,
        ColorBucket::White,
        ColorBucket::Gray,
        ColorBucket::Dark,
        ColorBucket::Mixed,
    ];

    pub fn of(pixel: Rgb) -> ColorBucket {
        let Rgb(r, g, b) = pixel;
        let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        if max < 50 {
            ColorBucket::Dark
        } else if max - min < 25 {
            if max > 200 {
                ColorBucket::White
            } else {
                ColorBucket::Gray
            }
        } else if r > 150 && g > 130 && b < 100 && (r - g).abs() < 60 {
            ColorBucket::Yellow
        } else if g > r && g > b {
            ColorBucket::Green
        } else if b > r && b > g {
            ColorBucket::Blue
        } else if r > g && r > b {
            if r < 180 && g > b + 20 {
                ColorBucket::Brown
            } else {
                ColorBucket::Red
            }
        } else {
            ColorBucket::Mixed
        }
    }

    /// Hardcoded guess for an image dominated by this colour
    pub fn guess(&self) -> (&'static str, f64) {
        match self {
            ColorBucket::Green => ("leaf", 0.65),
            ColorBucket::Blue => ("water", 0.6),
            ColorBucket::Brown => ("soil", 0.55),
            ColorBucket::Yellow => ("sunflower", 0.5),
            ColorBucket::Red => ("rose", 0.5),
            ColorBucket::White => ("daisy", 0.45),
            ColorBucket::Gray => ("rock", 0.5),
            ColorBucket::Dark => ("forest", 0.4),
            ColorBucket::Mixed => ("plant", 0.35),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ColorHeuristic;

impl ColorHeuristic {
    pub fn new() -> Self {
        Self
    }

    /// Most common bucket; earlier buckets in [`ColorBucket::ALL`] win ties
    pub fn dominant(&self, samples: &[Rgb]) -> Option<ColorBucket> {
        if samples.is_empty() {
            return None;
        }

        let mut counts = [0usize; 9];
        for pixel in samples {
            let bucket = ColorBucket::of(*pixel);
            if let Some(index) = ColorBucket::ALL.iter().position(|b| *b == bucket) {
                counts[index] += 1;
            }
        }

        let mut best = 0;
        for index in 1..counts.len() {
            if counts[index] > counts[best] {
                best = index;
            }
        }
        Some(ColorBucket::ALL[best])
    }

    pub fn analyze(&self, samples: &[Rgb]) -> Option<DetectionResult> {
        let bucket = self.dominant(samples)?;
        let (label, confidence) = bucket.guess();
        tracing::debug!(
            "Colour heuristic: {} samples, dominant {:?} -> '{}'",
            samples.len(),
            bucket,
            label
        );
        Some(DetectionResult::new(
            label,
            confidence,
            Vec::new(),
            DetectionSource::ColorHeuristic,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn test_pixel_buckets() {
        assert_eq!(ColorBucket::of(Rgb(34, 139, 34)), ColorBucket::Green);
        assert_eq!(ColorBucket::of(Rgb(30, 90, 200)), ColorBucket::Blue);
        assert_eq!(ColorBucket::of(Rgb(139, 69, 19)), ColorBucket::Brown);
        assert_eq!(ColorBucket::of(Rgb(240, 200, 40)), ColorBucket::Yellow);
        assert_eq!(ColorBucket::of(Rgb(220, 20, 60)), ColorBucket::Red);
        assert_eq!(ColorBucket::of(Rgb(245, 245, 240)), ColorBucket::White);
        assert_eq!(ColorBucket::of(Rgb(128, 128, 128)), ColorBucket::Gray);
        assert_eq!(ColorBucket::of(Rgb(10, 12, 20)), ColorBucket::Dark);
        assert_eq!(ColorBucket::of(Rgb(200, 60, 200)), ColorBucket::Mixed);
    }

    #[test]
    fn test_dominant_bucket_wins() {
        let samples = [Rgb(34, 139, 34), Rgb(40, 150, 50), Rgb(30, 90, 200)];
        let detection = ColorHeuristic::new().analyze(&samples).unwrap();
        assert_eq!(detection.name, "leaf");
        assert_eq!(detection.source, DetectionSource::ColorHeuristic);
    }

    #[test]
    fn test_tie_goes_to_earlier_bucket() {
        let samples = [Rgb(30, 90, 200), Rgb(34, 139, 34)];
        assert_eq!(ColorHeuristic::new().dominant(&samples), Some(ColorBucket::Green));
    }

    #[test]
    fn test_empty_samples() {
        assert!(ColorHeuristic::new().analyze(&[]).is_none());
    }

    #[test]
    fn test_every_guess_is_catalogued() {
        let kb = KnowledgeBase::global();
        for bucket in ColorBucket::ALL {
            let (label, confidence) = bucket.guess();
            assert!(kb.contains(label), "{:?} guesses uncatalogued '{}'", bucket, label);
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}
