//! Shared types and data contracts between the gateway and the core engine
//!
//! The core accepts exactly one input type, [`DetectionResult`], regardless of
//! whether it came from the cloud classifier, the colour heuristic, the random
//! fallback, or a host that already ran its own classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Detection Source
// ============================================================================

/// Which backing model produced a detection (provenance tracking)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionSource {
    GeneralClassifier,  // cloud general-image-recognition model
    FlowerSpecialist,   // cloud flower model, adopted over the general label
    ColorHeuristic,     // dominant pixel-colour bucket
    RandomFallback,     // showcase draw when nothing else is available
    HostSupplied,       // labels handed in by the caller
}

impl DetectionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralClassifier => "general-classifier",
            Self::FlowerSpecialist => "flower-specialist",
            Self::ColorHeuristic => "color-heuristic",
            Self::RandomFallback => "random-fallback",
            Self::HostSupplied => "host-supplied",
        }
    }
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Detection Result
// ============================================================================

/// Output of the classifier gateway (or a local fallback)
///
/// Contract: `confidence` is clamped to [0.0, 1.0]; `all_concepts` is ordered
/// most-confident first and does not repeat `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Primary label
    pub name: String,
    /// Confidence of the primary label [0.0, 1.0]
    pub confidence: f64,
    /// Secondary labels, most-confident first
    #[serde(default)]
    pub all_concepts: Vec<String>,
    /// Which model produced this detection
    pub source: DetectionSource,
}

impl DetectionResult {
    pub fn new(
        name: impl Into<String>,
        confidence: f64,
        all_concepts: Vec<String>,
        source: DetectionSource,
    ) -> Self {
        Self {
            name: name.into(),
            confidence: if confidence.is_nan() { 0.0 } else { confidence.clamp(0.0, 1.0) },
            all_concepts,
            source,
        }
    }

    /// Detection built from labels supplied by the caller
    pub fn host_supplied<I, S>(name: impl Into<String>, confidence: f64, concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            confidence,
            concepts.into_iter().map(Into::into).collect(),
            DetectionSource::HostSupplied,
        )
    }
}

// ============================================================================
// Pixel Samples
// ============================================================================

/// One sampled pixel, as sent by the capture layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);
