//! Narrative Composer
//!
//! Turns a resolved category plus the original detection into the user-facing
//! [`NarrativeRecord`]. Text comes from the knowledge base record when one
//! exists; otherwise each field is synthesized by its own generator
//! (see [`generators`]).
//!
//! The presentation mode decides which fields are shown:
//!
//! | Mode           | Visible sections                                     |
//! |----------------|------------------------------------------------------|
//! | Pollutant      | message, explanation, warning, plea                  |
//! | General object | message, explanation                                 |
//! | Animal         | message, explanation                                 |
//! | Nature         | message, explanation, consequences (if any), plea    |
//!
//! The introduction is a headline and is always rendered.

pub mod classify;
pub mod generators;
pub mod tables;

use crate::knowledge::{CategoryKey, KnowledgeBase};
use crate::types::DetectionResult;
use classify::{mentions_any, ANIMALS_AND_REPTILES, GENERAL_OBJECTS, POLLUTANTS};
use serde::Serialize;

const WARNING_TEMPLATE: &str =
    "⚠️ Warning: {name} harms wildlife, water, and soil. Handle it carefully and dispose of it responsibly.";

// ============================================================================
// Presentation Mode
// ============================================================================

/// Framing bucket for a composed narrative (mutually exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationMode {
    /// Full ecological narrative (default)
    Nature,
    /// Manufactured item or anything without a knowledge base record
    GeneralObject,
    /// Animal or reptile
    Animal,
    /// Pollutant or garbage, rendered with a warning
    Pollutant,
}

impl PresentationMode {
    /// Classify from both the resolved category and the raw label
    ///
    /// Either side flagging a non-nature bucket wins. Precedence when flags
    /// disagree: pollutant, then animal, then general object.
    pub fn classify(detected_as: &CategoryKey, original_detection: &str, kb: &KnowledgeBase) -> Self {
        let category = detected_as.as_str();
        let labels = [category, original_detection];

        if labels.iter().any(|l| mentions_any(l, POLLUTANTS)) {
            return PresentationMode::Pollutant;
        }
        if labels.iter().any(|l| mentions_any(l, ANIMALS_AND_REPTILES)) {
            return PresentationMode::Animal;
        }
        let uncatalogued = !kb.contains(category);
        if uncatalogued || labels.iter().any(|l| mentions_any(l, GENERAL_OBJECTS)) {
            return PresentationMode::GeneralObject;
        }
        PresentationMode::Nature
    }
}

// ============================================================================
// Narrative Record
// ============================================================================

/// One visible section of a rendered narrative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Message,
    Explanation,
    Consequences,
    Warning,
    Plea,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub text: &'a str,
}

fn section(kind: SectionKind, text: &str) -> Section<'_> {
    Section { kind, text }
}

/// Composed narrative for one classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeRecord {
    pub emoji: String,
    pub detected_as: CategoryKey,
    pub original_detection: String,
    pub introduction: String,
    pub message: String,
    pub explanation: String,
    pub consequences: Option<String>,
    pub plea: String,
    pub confidence: f64,
    pub mode: PresentationMode,
    /// Urgent warning, pollutant mode only
    pub warning: Option<String>,
}

impl NarrativeRecord {
    /// Visible sections in display order for this record's mode
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections = vec![
            section(SectionKind::Message, &self.message),
            section(SectionKind::Explanation, &self.explanation),
        ];

        match self.mode {
            PresentationMode::Pollutant => {
                if let Some(warning) = &self.warning {
                    sections.push(section(SectionKind::Warning, warning));
                }
                sections.push(section(SectionKind::Plea, &self.plea));
            }
            PresentationMode::GeneralObject | PresentationMode::Animal => {}
            PresentationMode::Nature => {
                if let Some(consequences) = &self.consequences {
                    sections.push(section(SectionKind::Consequences, consequences));
                }
                sections.push(section(SectionKind::Plea, &self.plea));
            }
        }

        sections
    }

    /// Headline plus visible sections, one paragraph each
    pub fn display_text(&self) -> String {
        let mut paragraphs = vec![format!("{} {}", self.emoji, self.introduction)];
        paragraphs.extend(self.sections().into_iter().map(|s| s.text.to_string()));
        paragraphs.join("\n\n")
    }

    /// Host-bridge form `{label, probability, message}`
    pub fn bridge_payload(&self) -> BridgePayload {
        BridgePayload {
            label: self.detected_as.to_string(),
            probability: self.confidence,
            message: self.display_text(),
        }
    }
}

/// JSON payload for a host WebView bridge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgePayload {
    pub label: String,
    pub probability: f64,
    pub message: String,
}

// ============================================================================
// Composer
// ============================================================================

/// Narrative composer (pure; reads only static tables)
pub struct NarrativeComposer {
    kb: &'static KnowledgeBase,
}

impl Default for NarrativeComposer {
    fn default() -> Self {
        Self::new(KnowledgeBase::global())
    }
}

impl NarrativeComposer {
    pub fn new(kb: &'static KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn compose(&self, category: &CategoryKey, detection: &DetectionResult) -> NarrativeRecord {
        let mode = PresentationMode::classify(category, &detection.name, self.kb);
        let name = category.as_str();

        let (emoji, introduction, message, explanation, consequences, plea) =
            match self.kb.record(category) {
                Some(record) => (
                    record.emoji.to_string(),
                    record.introduction.to_string(),
                    record.message.to_string(),
                    record.explanation.to_string(),
                    record.consequences.map(str::to_string),
                    record.plea.to_string(),
                ),
                None => {
                    tracing::debug!("No knowledge base record for '{}', generating text", name);
                    (
                        generators::generate_emoji(name),
                        generators::generate_introduction(name),
                        generators::generate_message(name),
                        generators::generate_explanation(name),
                        generators::generate_consequences(name),
                        generators::generate_plea(name),
                    )
                }
            };

        let warning = (mode == PresentationMode::Pollutant).then(|| {
            WARNING_TEMPLATE.replace("{name}", &generators::display_name(name))
        });

        NarrativeRecord {
            emoji,
            detected_as: category.clone(),
            original_detection: detection.name.clone(),
            introduction,
            message,
            explanation,
            consequences,
            plea,
            confidence: detection.confidence,
            mode,
            warning,
        }
    }
}
