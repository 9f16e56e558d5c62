//! Nature engine
//!
//! The pure core: normalize → resolve → compose → generate questions. Every
//! step is total, so [`NatureEngine::analyze`] always returns a displayable
//! [`Analysis`] whatever detection it is handed.

pub mod matching_rules;
pub mod normalizer;
pub mod overrides;
pub mod resolver;
pub mod snake;

pub use normalizer::{normalize, TermSet};
pub use resolver::{CategoryResolver, Resolution, ResolutionTier};
pub use snake::SnakeFallback;

use crate::config::Thresholds;
use crate::knowledge::{CategoryKey, KnowledgeBase};
use crate::narrative::{NarrativeComposer, NarrativeRecord};
use crate::quiz::{QuizGenerator, QuizQuestion};
use crate::types::DetectionResult;
use serde::Serialize;

/// Everything the presentation layer needs for one image
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub category: CategoryKey,
    pub resolution: Resolution,
    pub narrative: NarrativeRecord,
    pub questions: Vec<QuizQuestion>,
}

/// Facade over knowledge base, resolver, composer and quiz generator
pub struct NatureEngine {
    kb: &'static KnowledgeBase,
    resolver: CategoryResolver,
    composer: NarrativeComposer,
    quiz: QuizGenerator,
}

impl Default for NatureEngine {
    fn default() -> Self {
        Self::new(Thresholds::default(), SnakeFallback::default())
    }
}

impl NatureEngine {
    pub fn new(thresholds: Thresholds, snake_fallback: SnakeFallback) -> Self {
        let kb = KnowledgeBase::global();
        Self {
            kb,
            resolver: CategoryResolver::new(thresholds, snake_fallback),
            composer: NarrativeComposer::new(kb),
            quiz: QuizGenerator::new(),
        }
    }

    pub fn knowledge_base(&self) -> &'static KnowledgeBase {
        self.kb
    }

    pub fn resolver(&self) -> &CategoryResolver {
        &self.resolver
    }

    pub fn quiz(&self) -> &QuizGenerator {
        &self.quiz
    }

    /// Full pipeline for one detection
    pub fn analyze(&self, detection: &DetectionResult) -> Analysis {
        let terms = normalize(detection);
        let resolution = self.resolver.resolve_detailed(&terms, detection.confidence);

        tracing::info!(
            "'{}' ({:.2}, {}) resolved to '{}' via {:?}",
            detection.name,
            detection.confidence,
            detection.source,
            resolution.key,
            resolution.tier
        );

        self.finish(resolution, detection)
    }

    /// Compose for a category chosen by the caller, skipping resolution
    pub fn analyze_key(&self, category: CategoryKey, detection: &DetectionResult) -> Analysis {
        let tier = match &category {
            CategoryKey::Object => ResolutionTier::GenericBucket,
            CategoryKey::Passthrough(_) => ResolutionTier::ConfidencePassthrough,
            CategoryKey::Static(_) => ResolutionTier::DirectLookup,
        };
        let resolution = Resolution {
            key: category,
            tier,
            base: None,
            applied_override: None,
            override_group: None,
        };
        self.finish(resolution, detection)
    }

    fn finish(&self, resolution: Resolution, detection: &DetectionResult) -> Analysis {
        let category = resolution.key.clone();
        let narrative = self.composer.compose(&category, detection);
        let questions = self.quiz.generate_questions(&category);

        Analysis {
            category,
            resolution,
            narrative,
            questions,
        }
    }
}
