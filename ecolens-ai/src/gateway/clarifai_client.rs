//! Clarifai image classification client
//!
//! Calls the general recognition model and, for plant-looking images the
//! general model is unsure about, a specialist flower model. Requests are
//! spaced by a minimum interval so a burst of uploads cannot hammer the API.

use super::{normalize_concepts, ClassifierGateway, Concept, GatewayError};
use crate::config::{ClassifierConfig, Thresholds};
use crate::narrative::classify::{mentions_any, FLOWERS};
use crate::types::{DetectionResult, DetectionSource};
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

const USER_AGENT: &str = concat!("EcoLens/", env!("CARGO_PKG_VERSION"));
const RATE_LIMIT_MS: u64 = 250;
const CONNECT_TIMEOUT_SECS: u64 = 5;
/// Clarifai's "Ok" status code
const STATUS_SUCCESS: u32 = 10000;

/// Extra words that make a general label worth a second opinion
const BOTANICAL_HINTS: &[&str] = &["plant", "flora", "petal", "garden", "botanical", "blooming"];

#[derive(Debug, Deserialize)]
struct PredictResponse {
    status: ApiStatus,
    #[serde(default)]
    outputs: Vec<PredictOutput>,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    code: u32,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct PredictOutput {
    data: OutputData,
}

#[derive(Debug, Default, Deserialize)]
struct OutputData {
    #[serde(default)]
    concepts: Vec<Concept>,
}

/// Minimum spacing between outbound requests
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// Clarifai v2 client
pub struct ClarifaiClient {
    http_client: reqwest::Client,
    rate_limiter: Arc<RateLimiter>,
    api_key: String,
    base_url: String,
    general_model: String,
    flower_model: Option<String>,
    thresholds: Thresholds,
}

impl ClarifaiClient {
    pub fn new(config: &ClassifierConfig, thresholds: Thresholds) -> Result<Self, GatewayError> {
        let api_key = config.api_key.clone().ok_or(GatewayError::NotConfigured)?;

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            rate_limiter: Arc::new(RateLimiter::new(RATE_LIMIT_MS)),
            api_key,
            base_url: config.base_url.clone(),
            general_model: config.general_model.clone(),
            flower_model: config.flower_model.clone(),
            thresholds,
        })
    }

    /// Raw concepts from one model
    pub async fn predict(&self, model: &str, image_base64: &str) -> Result<Vec<Concept>, GatewayError> {
        self.rate_limiter.wait().await;

        let url = format!("{}/models/{}/outputs", self.base_url, model);
        tracing::debug!(model = %model, url = %url, "Querying classifier");

        let body = json!({
            "inputs": [{ "data": { "image": { "base64": image_base64 } } }]
        });

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        extract_concepts(parsed)
    }

    /// Decide whether to consult the flower model for this general result
    fn wants_flower_opinion(&self, general: &DetectionResult) -> bool {
        if self.flower_model.is_none() || general.confidence >= self.thresholds.general_model_trust {
            return false;
        }
        std::iter::once(&general.name)
            .chain(general.all_concepts.iter())
            .any(|label| mentions_any(label, FLOWERS) || mentions_any(label, BOTANICAL_HINTS))
    }

    async fn flower_opinion(
        &self,
        model: &str,
        image_base64: &str,
        general: DetectionResult,
    ) -> DetectionResult {
        let concepts = match self.predict(model, image_base64).await {
            Ok(concepts) => concepts,
            Err(e) => {
                tracing::warn!("Flower model failed, keeping general labels: {}", e);
                return general;
            }
        };

        let Some(top) = concepts.into_iter().max_by(|a, b| a.value.total_cmp(&b.value)) else {
            return general;
        };

        if top.value < self.thresholds.flower_min_confidence {
            tracing::debug!(
                "Flower model top '{}' ({:.2}) below {:.2}, keeping general labels",
                top.name,
                top.value,
                self.thresholds.flower_min_confidence
            );
            return general;
        }

        tracing::info!(
            "Flower model relabelled '{}' as '{}' ({:.2})",
            general.name,
            top.name,
            top.value
        );
        adopt_specialist_label(general, top)
    }
}

#[async_trait]
impl ClassifierGateway for ClarifaiClient {
    async fn classify(&self, image_base64: &str) -> Result<DetectionResult, GatewayError> {
        let payload = strip_data_url(image_base64);
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| GatewayError::InvalidImage(e.to_string()))?;

        let concepts = self.predict(&self.general_model, payload).await?;
        let general = normalize_concepts(concepts, &self.thresholds, DetectionSource::GeneralClassifier)
            .ok_or(GatewayError::EmptyResult)?;

        tracing::info!(
            "Classifier top label '{}' ({:.2}), {} more concepts",
            general.name,
            general.confidence,
            general.all_concepts.len()
        );

        match self.flower_model.as_deref() {
            Some(model) if self.wants_flower_opinion(&general) => {
                Ok(self.flower_opinion(model, payload, general).await)
            }
            _ => Ok(general),
        }
    }

    fn name(&self) -> &'static str {
        "clarifai"
    }
}

fn extract_concepts(response: PredictResponse) -> Result<Vec<Concept>, GatewayError> {
    if response.status.code != STATUS_SUCCESS {
        return Err(GatewayError::Api {
            status: u16::try_from(response.status.code).unwrap_or(u16::MAX),
            message: response.status.description,
        });
    }

    response
        .outputs
        .into_iter()
        .next()
        .map(|output| output.data.concepts)
        .ok_or_else(|| GatewayError::Parse("response has no outputs".to_string()))
}

/// Specialist label becomes primary; general labels stay as concepts
fn adopt_specialist_label(general: DetectionResult, top: Concept) -> DetectionResult {
    let mut concepts: Vec<String> = Vec::with_capacity(general.all_concepts.len() + 1);
    for label in std::iter::once(general.name).chain(general.all_concepts) {
        if !label.eq_ignore_ascii_case(&top.name) && !concepts.contains(&label) {
            concepts.push(label);
        }
    }
    DetectionResult::new(top.name, top.value, concepts, DetectionSource::FlowerSpecialist)
}

/// Accept `data:image/...;base64,` URLs as well as bare payloads
fn strip_data_url(image: &str) -> &str {
    let trimmed = image.trim();
    match trimmed.split_once(";base64,") {
        Some((prefix, payload)) if prefix.starts_with("data:") => payload,
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(flower_model: Option<&str>) -> ClarifaiClient {
        let config = ClassifierConfig {
            api_key: Some("test-key".to_string()),
            flower_model: flower_model.map(str::to_string),
            ..ClassifierConfig::default()
        };
        ClarifaiClient::new(&config, Thresholds::default()).unwrap()
    }

    #[test]
    fn test_requires_api_key() {
        let result = ClarifaiClient::new(&ClassifierConfig::default(), Thresholds::default());
        assert!(matches!(result, Err(GatewayError::NotConfigured)));
    }

    #[test]
    fn test_extract_concepts() {
        let response: PredictResponse = serde_json::from_value(json!({
            "status": { "code": 10000, "description": "Ok" },
            "outputs": [{ "data": { "concepts": [
                { "id": "ai_1", "name": "tree", "value": 0.97 },
                { "id": "ai_2", "name": "leaf", "value": 0.81 }
            ]}}]
        }))
        .unwrap();

        let concepts = extract_concepts(response).unwrap();
        assert_eq!(concepts.len(), 2);
        assert_eq!(concepts[0], Concept::new("tree", 0.97));
    }

    #[test]
    fn test_extract_concepts_failure_status() {
        let response: PredictResponse = serde_json::from_value(json!({
            "status": { "code": 11102, "description": "Invalid request" }
        }))
        .unwrap();

        match extract_concepts(response) {
            Err(GatewayError::Api { status, message }) => {
                assert_eq!(status, 11102);
                assert_eq!(message, "Invalid request");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_flower_opinion_gate() {
        let unsure_plant =
            DetectionResult::new("plant", 0.7, vec!["garden".into()], DetectionSource::GeneralClassifier);
        let sure_plant = DetectionResult::new("plant", 0.9, vec![], DetectionSource::GeneralClassifier);
        let unsure_car = DetectionResult::new("car", 0.6, vec![], DetectionSource::GeneralClassifier);

        let with_flower = client(Some("flower-recognition"));
        assert!(with_flower.wants_flower_opinion(&unsure_plant));
        assert!(!with_flower.wants_flower_opinion(&sure_plant));
        assert!(!with_flower.wants_flower_opinion(&unsure_car));

        assert!(!client(None).wants_flower_opinion(&unsure_plant));
    }

    #[test]
    fn test_adopt_specialist_label() {
        let general = DetectionResult::new(
            "flower",
            0.7,
            vec!["petal".into(), "Rose".into()],
            DetectionSource::GeneralClassifier,
        );
        let adopted = adopt_specialist_label(general, Concept::new("rose", 0.82));
        assert_eq!(adopted.name, "rose");
        assert_eq!(adopted.confidence, 0.82);
        assert_eq!(adopted.all_concepts, vec!["flower", "petal"]);
        assert_eq!(adopted.source, DetectionSource::FlowerSpecialist);
    }

    #[test]
    fn test_strip_data_url() {
        assert_eq!(strip_data_url("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_url(" AAAA "), "AAAA");
    }
}
