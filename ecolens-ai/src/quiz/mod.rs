//! Quiz Generator
//!
//! Produces a short ordered question list for a resolved category:
//! 1. Bank questions for the category (exact key, else the longest bank key the
//!    category mentions, e.g. "red-bellied-black-snake" uses the "snake" set)
//! 2. Padded from the category's broad bucket (tree/flower/water/animal/harmful)
//!    up to [`MIN_QUESTIONS`], never repeating a question
//! 3. Capped at [`MAX_QUESTIONS`]
//!
//! The result is never empty.

pub mod buckets;
pub mod session;
pub mod store;

pub use buckets::QuizBucket;
pub use session::{
    AnswerFeedback, QuizError, QuizProgress, QuizSession, QuizState, QuizSummary, ScoreTier,
    FEEDBACK_DELAY, POINTS_PER_CORRECT,
};
pub use store::{QuizSessionStore, SessionLimits};

use crate::knowledge::quiz_bank::{QuestionTemplate, CATEGORY_QUESTIONS};
use crate::knowledge::CategoryKey;
use crate::narrative::classify::contains_phrase;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

pub const MIN_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 5;

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Exactly four options
    pub options: Vec<String>,
    /// Index into `options`
    pub correct: usize,
    pub explanation: String,
}

impl From<&QuestionTemplate> for QuizQuestion {
    fn from(template: &QuestionTemplate) -> Self {
        Self {
            question: template.question.to_string(),
            options: template.options.iter().map(|o| o.to_string()).collect(),
            correct: template.correct,
            explanation: template.explanation.to_string(),
        }
    }
}

/// Quiz generator over the static question bank
#[derive(Debug, Default, Clone)]
pub struct QuizGenerator;

impl QuizGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_questions(&self, category: &CategoryKey) -> Vec<QuizQuestion> {
        self.questions_for(category.as_str())
    }

    /// Question list for a raw category string
    pub fn questions_for(&self, category: &str) -> Vec<QuizQuestion> {
        let mut selected: Vec<&'static QuestionTemplate> = Vec::with_capacity(MAX_QUESTIONS);

        let bank = bank_questions(category);
        if let Some((key, questions)) = bank {
            tracing::debug!("Quiz for '{}' uses bank entry '{}'", category, key);
            selected.extend(questions.iter());
        }

        if selected.len() < MIN_QUESTIONS {
            let bucket = QuizBucket::of(category);
            tracing::debug!("Quiz for '{}' padded from {:?} bucket", category, bucket);
            for template in bucket.questions() {
                if selected.len() >= MIN_QUESTIONS && bank.is_some() {
                    break;
                }
                if !selected.iter().any(|s| s.question == template.question) {
                    selected.push(template);
                }
            }
        }

        selected.truncate(MAX_QUESTIONS);
        selected.into_iter().map(QuizQuestion::from).collect()
    }
}

/// Bank entry: exact key, else the longest key the category mentions
fn bank_questions(category: &str) -> Option<(&'static str, &'static [QuestionTemplate])> {
    let lowered = category.trim().to_lowercase();

    if let Some(entry) = CATEGORY_QUESTIONS.iter().find(|(key, _)| *key == lowered) {
        return Some(*entry);
    }

    let mut by_length: Vec<(&'static str, &'static [QuestionTemplate])> = CATEGORY_QUESTIONS.to_vec();
    by_length.sort_by_key(|(key, _)| Reverse(key.len()));
    by_length
        .into_iter()
        .find(|(key, _)| contains_phrase(&lowered, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(category: &str) -> Vec<QuizQuestion> {
        QuizGenerator::new().questions_for(category)
    }

    #[test]
    fn test_bank_questions_come_first() {
        let qs = questions("oak");
        assert_eq!(qs[0].question, "What seed does an oak tree produce?");
        assert!((MIN_QUESTIONS..=MAX_QUESTIONS).contains(&qs.len()));
    }

    #[test]
    fn test_substring_bank_match() {
        let qs = questions("red-bellied-black-snake");
        assert_eq!(qs[0].question, "How do snakes smell?");
    }

    #[test]
    fn test_unknown_category_uses_bucket() {
        let qs = questions("xyz123");
        assert!(!qs.is_empty());
        assert_eq!(qs[0].question, crate::knowledge::quiz_bank::TREE_QUESTIONS[0].question);
        assert!(qs.len() >= MIN_QUESTIONS && qs.len() <= MAX_QUESTIONS);
    }

    #[test]
    fn test_no_duplicate_questions() {
        for category in ["dog", "plastic", "jasmine", "ganges", "Object", "cottonmouth"] {
            let qs = questions(category);
            let mut seen = std::collections::HashSet::new();
            for q in &qs {
                assert!(seen.insert(q.question.clone()), "duplicate in {}", category);
                assert_eq!(q.options.len(), 4);
                assert!(q.correct < 4);
            }
            assert!((2..=MAX_QUESTIONS).contains(&qs.len()), "{} -> {}", category, qs.len());
        }
    }

    #[test]
    fn test_generate_from_category_key() {
        let qs = QuizGenerator::new().generate_questions(&CategoryKey::Static("plastic"));
        assert_eq!(qs[0].question, "How long can plastic last in nature?");
    }
}
