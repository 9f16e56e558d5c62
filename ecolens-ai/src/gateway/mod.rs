//! Classifier gateway and local fallbacks
//!
//! Everything that turns an image (or its sampled pixels) into a
//! [`DetectionResult`]. The core engine never depends on this layer
//! succeeding: [`pipeline::DetectionPipeline`] degrades from the cloud
//! classifier to the colour heuristic to a random showcase category.

pub mod clarifai_client;
pub mod color_heuristic;
pub mod pipeline;
pub mod random_fallback;

pub use clarifai_client::ClarifaiClient;
pub use color_heuristic::{ColorBucket, ColorHeuristic};
pub use pipeline::{DetectionPipeline, DetectionRequest};
pub use random_fallback::{pick_random_category, RecentCategories};

use crate::config::Thresholds;
use crate::types::{DetectionResult, DetectionSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classifier gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Classifier not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),

    #[error("No concept above the confidence floor")]
    EmptyResult,
}

/// One labelled prediction from the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub value: f64,
}

impl Concept {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Image classifier boundary
///
/// Object-safe so handlers can hold `Arc<dyn ClassifierGateway>` and tests can
/// substitute a canned implementation.
#[async_trait]
pub trait ClassifierGateway: Send + Sync {
    /// Classify a base64-encoded image
    async fn classify(&self, image_base64: &str) -> Result<DetectionResult, GatewayError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Ranked concepts → DetectionResult
///
/// Drops concepts below `min_concept_confidence` and empty names, sorts by
/// confidence (stable, so classifier order breaks ties), and takes the first as
/// the primary label. Repeated names are kept once. `None` when nothing survives.
pub fn normalize_concepts(
    concepts: Vec<Concept>,
    thresholds: &Thresholds,
    source: DetectionSource,
) -> Option<DetectionResult> {
    let mut kept: Vec<Concept> = concepts
        .into_iter()
        .filter(|c| !c.name.trim().is_empty())
        .filter(|c| c.value >= thresholds.min_concept_confidence)
        .collect();
    kept.sort_by(|a, b| b.value.total_cmp(&a.value));

    let mut names: Vec<String> = Vec::with_capacity(kept.len());
    for concept in &kept {
        let name = concept.name.trim().to_string();
        if !names.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
            names.push(name);
        }
    }

    let top = kept.first()?;
    let mut names = names.into_iter();
    let primary = names.next()?;

    Some(DetectionResult::new(primary, top.value, names.collect(), source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_concepts_sorts_and_filters() {
        let concepts = vec![
            Concept::new("leaf", 0.6),
            Concept::new("tree", 0.95),
            Concept::new("noise", 0.1),
            Concept::new("oak", 0.8),
        ];
        let detection = normalize_concepts(
            concepts,
            &Thresholds::default(),
            DetectionSource::GeneralClassifier,
        )
        .unwrap();

        assert_eq!(detection.name, "tree");
        assert_eq!(detection.confidence, 0.95);
        assert_eq!(detection.all_concepts, vec!["oak", "leaf"]);
        assert_eq!(detection.source, DetectionSource::GeneralClassifier);
    }

    #[test]
    fn test_normalize_concepts_empty() {
        let concepts = vec![Concept::new("blur", 0.05)];
        assert!(normalize_concepts(
            concepts,
            &Thresholds::default(),
            DetectionSource::GeneralClassifier
        )
        .is_none());
        assert!(normalize_concepts(Vec::new(), &Thresholds::default(), DetectionSource::GeneralClassifier)
            .is_none());
    }

    #[test]
    fn test_normalize_concepts_dedupes_names() {
        let concepts = vec![Concept::new("Tree", 0.9), Concept::new("tree", 0.7)];
        let detection = normalize_concepts(
            concepts,
            &Thresholds::default(),
            DetectionSource::GeneralClassifier,
        )
        .unwrap();
        assert!(detection.all_concepts.is_empty());
    }
}
