//! Last-resort showcase draw
//!
//! When neither the classifier nor the colour heuristic produced anything,
//! show a random catalogued nature category, never the one shown just before.

use crate::types::{DetectionResult, DetectionSource};
use rand::seq::SliceRandom;
use rand::Rng;

pub const RANDOM_FALLBACK_CONFIDENCE: f64 = 0.5;

/// Categories eligible for the random draw
pub const SHOWCASE_CATEGORIES: &[&str] = &[
    "oak", "sunflower", "rose", "lotus", "bee", "butterfly", "river", "forest", "mountain",
    "owl", "elephant", "coral-reef", "bamboo", "dolphin",
];

/// The last category shown to this user
///
/// Held by the caller (per client) rather than in a process-wide static.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentCategories {
    last: Option<String>,
}

impl RecentCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last(last: Option<String>) -> Self {
        Self { last }
    }

    pub fn record(&mut self, category: impl Into<String>) {
        self.last = Some(category.into());
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

/// Uniform draw over [`SHOWCASE_CATEGORIES`] minus the most recent one
pub fn pick_random_category<R: Rng + ?Sized>(recent: &RecentCategories, rng: &mut R) -> &'static str {
    let candidates: Vec<&'static str> = SHOWCASE_CATEGORIES
        .iter()
        .copied()
        .filter(|c| Some(*c) != recent.last())
        .collect();

    candidates
        .choose(rng)
        .copied()
        .unwrap_or(SHOWCASE_CATEGORIES[0])
}

/// Random draw wrapped as a detection
pub fn random_detection<R: Rng + ?Sized>(recent: &RecentCategories, rng: &mut R) -> DetectionResult {
    let category = pick_random_category(recent, rng);
    DetectionResult::new(
        category,
        RANDOM_FALLBACK_CONFIDENCE,
        Vec::new(),
        DetectionSource::RandomFallback,
    )
}
