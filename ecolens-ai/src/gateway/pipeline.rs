//! Detection pipeline: classifier → colour heuristic → random fallback
//!
//! `detect` never fails. Every step down the ladder is logged with `warn!`.

use super::color_heuristic::ColorHeuristic;
use super::random_fallback::{random_detection, RecentCategories};
use super::ClassifierGateway;
use crate::config::Thresholds;
use crate::types::{DetectionResult, Rgb};
use serde::Deserialize;
use std::sync::Arc;

/// What the capture layer sends for one image
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionRequest {
    /// Base64 image (bare or `data:` URL)
    #[serde(default)]
    pub image_base64: Option<String>,
    /// Sampled pixels for the colour heuristic
    #[serde(default)]
    pub pixels: Vec<Rgb>,
    /// Category shown to this client last time
    #[serde(default)]
    pub recent: Option<String>,
}

pub struct DetectionPipeline {
    gateway: Option<Arc<dyn ClassifierGateway>>,
    heuristic: ColorHeuristic,
    thresholds: Thresholds,
}

impl DetectionPipeline {
    pub fn new(gateway: Option<Arc<dyn ClassifierGateway>>, thresholds: Thresholds) -> Self {
        Self {
            gateway,
            heuristic: ColorHeuristic::new(),
            thresholds,
        }
    }

    pub fn has_gateway(&self) -> bool {
        self.gateway.is_some()
    }

    pub async fn detect(&self, request: &DetectionRequest) -> DetectionResult {
        let classified = self.classify(request).await;

        match classified {
            Some(detection) if detection.confidence >= self.thresholds.low_confidence_fallback => {
                return detection;
            }
            Some(detection) => {
                tracing::warn!(
                    "Classifier confidence {:.2} below {:.2}, trying colour heuristic",
                    detection.confidence,
                    self.thresholds.low_confidence_fallback
                );
                // A weak label still beats a random draw
                return self.heuristic.analyze(&request.pixels).unwrap_or(detection);
            }
            None => {}
        }

        if let Some(detection) = self.heuristic.analyze(&request.pixels) {
            tracing::warn!("Using colour heuristic result '{}'", detection.name);
            return detection;
        }

        let recent = RecentCategories::with_last(request.recent.clone());
        let detection = random_detection(&recent, &mut rand::thread_rng());
        tracing::warn!("No usable detection, showing random category '{}'", detection.name);
        detection
    }

    async fn classify(&self, request: &DetectionRequest) -> Option<DetectionResult> {
        let gateway = self.gateway.as_ref()?;
        let image = request.image_base64.as_deref().filter(|i| !i.trim().is_empty())?;

        match gateway.classify(image).await {
            Ok(detection) => Some(detection),
            Err(e) => {
                tracing::warn!("Classifier '{}' failed: {}", gateway.name(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;
    use crate::types::DetectionSource;
    use async_trait::async_trait;

    struct Canned(Result<DetectionResult, ()>);

    #[async_trait]
    impl ClassifierGateway for Canned {
        async fn classify(&self, _image_base64: &str) -> Result<DetectionResult, GatewayError> {
            self.0.clone().map_err(|_| GatewayError::Network("unreachable".into()))
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    fn pipeline(result: Result<DetectionResult, ()>) -> DetectionPipeline {
        DetectionPipeline::new(Some(Arc::new(Canned(result))), Thresholds::default())
    }

    fn request(pixels: Vec<Rgb>) -> DetectionRequest {
        DetectionRequest {
            image_base64: Some("AAAA".to_string()),
            pixels,
            recent: None,
        }
    }

    fn general(name: &str, confidence: f64) -> DetectionResult {
        DetectionResult::new(name, confidence, vec![], DetectionSource::GeneralClassifier)
    }

    #[tokio::test]
    async fn test_confident_classifier_result_is_used() {
        let detection = pipeline(Ok(general("oak", 0.9)))
            .detect(&request(vec![Rgb(30, 90, 200)]))
            .await;
        assert_eq!(detection.name, "oak");
    }

    #[tokio::test]
    async fn test_low_confidence_uses_heuristic() {
        let detection = pipeline(Ok(general("blob", 0.35)))
            .detect(&request(vec![Rgb(30, 90, 200)]))
            .await;
        assert_eq!(detection.source, DetectionSource::ColorHeuristic);
        assert_eq!(detection.name, "water");
    }

    #[tokio::test]
    async fn test_low_confidence_without_pixels_keeps_label() {
        let detection = pipeline(Ok(general("blob", 0.35))).detect(&request(vec![])).await;
        assert_eq!(detection.name, "blob");
    }

    #[tokio::test]
    async fn test_gateway_failure_falls_back() {
        let detection = pipeline(Err(())).detect(&request(vec![Rgb(34, 139, 34)])).await;
        assert_eq!(detection.source, DetectionSource::ColorHeuristic);

        let detection = pipeline(Err(())).detect(&request(vec![])).await;
        assert_eq!(detection.source, DetectionSource::RandomFallback);
    }

    #[tokio::test]
    async fn test_no_gateway_random_avoids_recent() {
        let pipeline = DetectionPipeline::new(None, Thresholds::default());
        assert!(!pipeline.has_gateway());
        for _ in 0..50 {
            let req = DetectionRequest {
                recent: Some("oak".to_string()),
                ..DetectionRequest::default()
            };
            let detection = pipeline.detect(&req).await;
            assert_ne!(detection.name, "oak");
        }
    }
}
