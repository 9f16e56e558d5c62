//! ecolens-ai - Nature identification service
//!
//! Classifies an uploaded photo, resolves the labels to one nature category,
//! and answers with an educational narrative plus a short quiz.
//!
//! Default port: 5730

use anyhow::Result;
use clap::Parser;
use ecolens_ai::config::ServiceConfig;
use ecolens_ai::engine::NatureEngine;
use ecolens_ai::gateway::{ClarifaiClient, ClassifierGateway, DetectionPipeline};
use ecolens_ai::AppState;
use ecolens_common::logging::{init_tracing, with_bootstrap_logging};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_LOG_DIRECTIVES: &str = "ecolens_ai={level},ecolens_common={level},tower_http={level}";

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ecolens-ai")]
#[command(about = "Nature identification service for EcoLens")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "ECOLENS_PORT")]
    port: Option<u16>,

    /// Path to the TOML config file
    #[arg(short, long, env = "ECOLENS_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config warnings (missing file, missing API key) need a subscriber already
    let config = with_bootstrap_logging(DEFAULT_LOG_DIRECTIVES, || {
        ServiceConfig::load(args.port, args.config.as_deref())
    })?;
    init_tracing(DEFAULT_LOG_DIRECTIVES, &config.logging)?;

    info!("Starting ecolens-ai (Nature Identification) service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Snake fallback strategy: {:?}", config.snake_fallback);

    let gateway: Option<Arc<dyn ClassifierGateway>> =
        match ClarifaiClient::new(&config.classifier, config.thresholds.clone()) {
            Ok(client) => {
                info!(
                    "Classifier: {} (model {}, flower model {:?})",
                    config.classifier.base_url,
                    config.classifier.general_model,
                    config.classifier.flower_model
                );
                Some(Arc::new(client))
            }
            Err(e) => {
                warn!("Classifier unavailable ({}), using local fallbacks only", e);
                None
            }
        };

    let engine = NatureEngine::new(config.thresholds.clone(), config.snake_fallback);
    let pipeline = DetectionPipeline::new(gateway, config.thresholds.clone());
    let state = AppState::with_session_limits(engine, pipeline, config.quiz_sessions);

    let app = ecolens_ai::build_router(state);

    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on http://{}", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
