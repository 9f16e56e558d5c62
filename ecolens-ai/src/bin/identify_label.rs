//! identify-label - run the nature engine from the command line
//!
//! Resolves a label (plus optional secondary concepts) or an image file and
//! prints the narrative and quiz, as text or JSON.
//!
//! Usage:
//!   identify-label "Golden retriever" --concepts dog,puppy --confidence 0.92
//!   identify-label --image photo.jpg
//!   identify-label oak --json

use anyhow::{bail, Context, Result};
use base64::Engine;
use clap::Parser;
use ecolens_ai::config::ServiceConfig;
use ecolens_ai::engine::{Analysis, NatureEngine};
use ecolens_ai::gateway::{ClarifaiClient, ClassifierGateway};
use ecolens_ai::types::DetectionResult;
use ecolens_common::logging::{init_tracing, with_bootstrap_logging};
use std::path::PathBuf;

const DEFAULT_LOG_DIRECTIVES: &str = "ecolens_ai={level},ecolens_common={level}";

#[derive(Parser, Debug)]
#[command(name = "identify-label")]
#[command(about = "Resolve a label or image to a nature category and print its story and quiz")]
#[command(version)]
struct Args {
    /// Primary label as a classifier would report it
    label: Option<String>,

    /// Confidence of the primary label (0.0 - 1.0)
    #[arg(long, default_value_t = 0.8)]
    confidence: f64,

    /// Secondary concepts, most confident first
    #[arg(long, value_delimiter = ',')]
    concepts: Vec<String>,

    /// Classify this image file with the configured classifier instead
    #[arg(long, conflicts_with = "label")]
    image: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(short, long, env = "ECOLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = with_bootstrap_logging(DEFAULT_LOG_DIRECTIVES, || {
        ServiceConfig::load(None, args.config.as_deref())
    })?;
    init_tracing(DEFAULT_LOG_DIRECTIVES, &config.logging)?;

    let detection = match (&args.image, &args.label) {
        (Some(path), _) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
            let client = ClarifaiClient::new(&config.classifier, config.thresholds.clone())
                .context("Image classification needs ECOLENS_CLASSIFIER_API_KEY")?;
            client.classify(&encoded).await?
        }
        (None, Some(label)) => {
            DetectionResult::host_supplied(label.clone(), args.confidence, args.concepts.clone())
        }
        (None, None) => bail!("Give a label or --image <path>"),
    };

    let engine = NatureEngine::new(config.thresholds.clone(), config.snake_fallback);
    let analysis = engine.analyze(&detection);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_text(&detection, &analysis);
    }

    Ok(())
}

fn print_text(detection: &DetectionResult, analysis: &Analysis) {
    println!(
        "Detected '{}' ({:.0}%, {})",
        detection.name,
        detection.confidence * 100.0,
        detection.source
    );
    print!("Category: {} via {:?}", analysis.category, analysis.resolution.tier);
    if let Some(rule) = analysis.resolution.applied_override {
        print!(" (override: {})", rule);
    }
    println!();
    println!();
    println!("{}", analysis.narrative.display_text());
    println!();
    println!("Quiz ({} questions):", analysis.questions.len());
    for (number, question) in analysis.questions.iter().enumerate() {
        println!();
        println!("{}. {}", number + 1, question.question);
        for (index, option) in question.options.iter().enumerate() {
            let marker = if index == question.correct { '*' } else { ' ' };
            println!("   {} {}) {}", marker, (b'a' + index as u8) as char, option);
        }
        println!("   {}", question.explanation);
    }
}
