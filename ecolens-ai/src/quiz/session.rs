//! Quiz session state machine
//!
//! ```text
//! NotStarted --start--> InProgress --(answer, advance)*--> Complete
//! ```
//!
//! Each question is answered once, then advanced past. Scoring is +10 per
//! correct answer. `Complete` is terminal; a new detection gets a new session.

use super::QuizQuestion;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Points for a correct answer
pub const POINTS_PER_CORRECT: u32 = 10;

/// How long the presentation layer shows answer feedback before advancing
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz already started")]
    AlreadyStarted,

    #[error("Quiz is not in progress")]
    NotInProgress,

    #[error("Invalid choice {choice}: question has {options} options")]
    InvalidChoice { choice: usize, options: usize },

    #[error("Current question already answered")]
    AlreadyAnswered,

    #[error("Current question not answered yet")]
    NotAnswered,

    /// Answer key points outside the option list
    #[error("Question {index} is malformed: answer {correct} of {options} options")]
    MalformedQuestion {
        index: usize,
        correct: usize,
        options: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    NotStarted,
    InProgress,
    Complete,
}

/// Final score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Expert,
    GreatJob,
    KeepLearning,
}

impl ScoreTier {
    pub fn for_score(score: u32) -> Self {
        if score >= 20 {
            ScoreTier::Expert
        } else if score >= 10 {
            ScoreTier::GreatJob
        } else {
            ScoreTier::KeepLearning
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreTier::Expert => "🏆 Amazing! You're a nature expert!",
            ScoreTier::GreatJob => "🌟 Great job! You know a lot about nature!",
            ScoreTier::KeepLearning => "🌱 Keep learning! Every explorer starts somewhere.",
        }
    }
}

/// Result of one answer submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub chosen: usize,
    pub correct_index: usize,
    pub correct_option: String,
    pub explanation: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSummary {
    pub score: u32,
    pub max_score: u32,
    pub correct_answers: usize,
    pub total_questions: usize,
    pub tier: ScoreTier,
    pub message: &'static str,
}

/// Outcome of advancing past an answered question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuizProgress {
    Next { index: usize, question: QuizQuestion },
    Complete { summary: QuizSummary },
}

/// One user's pass through a question list
#[derive(Debug, Clone, Serialize)]
pub struct QuizSession {
    category: String,
    questions: Vec<QuizQuestion>,
    state: QuizState,
    score: u32,
    current_index: usize,
    answered: bool,
    correct_answers: usize,
}

impl QuizSession {
    pub fn new(category: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            category: category.into(),
            questions,
            state: QuizState::NotStarted,
            score: 0,
            current_index: 0,
            answered: false,
            correct_answers: 0,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Question awaiting an answer (None unless in progress)
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    /// NotStarted -> InProgress, resetting score and position
    pub fn start(&mut self) -> Result<Option<&QuizQuestion>, QuizError> {
        if self.state != QuizState::NotStarted {
            return Err(QuizError::AlreadyStarted);
        }

        self.score = 0;
        self.current_index = 0;
        self.correct_answers = 0;
        self.answered = false;
        self.state = if self.questions.is_empty() {
            QuizState::Complete
        } else {
            QuizState::InProgress
        };

        tracing::debug!(
            "Quiz for '{}' started with {} questions",
            self.category,
            self.questions.len()
        );
        Ok(self.current_question())
    }

    /// Score the current question; exact index match earns the points
    pub fn answer(&mut self, choice: usize) -> Result<AnswerFeedback, QuizError> {
        let question = self.current_question().ok_or(QuizError::NotInProgress)?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        if choice >= question.options.len() {
            return Err(QuizError::InvalidChoice {
                choice,
                options: question.options.len(),
            });
        }

        let correct_index = question.correct;
        let correct_option = question
            .options
            .get(correct_index)
            .cloned()
            .ok_or(QuizError::MalformedQuestion {
                index: self.current_index,
                correct: correct_index,
                options: question.options.len(),
            })?;
        let explanation = question.explanation.clone();
        let correct = choice == correct_index;

        self.answered = true;
        if correct {
            self.score += POINTS_PER_CORRECT;
            self.correct_answers += 1;
        }

        Ok(AnswerFeedback {
            correct,
            chosen: choice,
            correct_index,
            correct_option,
            explanation,
            score: self.score,
        })
    }

    /// Move past the answered question; the last one completes the quiz
    pub fn advance(&mut self) -> Result<QuizProgress, QuizError> {
        if self.state != QuizState::InProgress {
            return Err(QuizError::NotInProgress);
        }
        if !self.answered {
            return Err(QuizError::NotAnswered);
        }

        self.current_index += 1;
        self.answered = false;

        match self.questions.get(self.current_index) {
            Some(question) => Ok(QuizProgress::Next {
                index: self.current_index,
                question: question.clone(),
            }),
            None => {
                self.state = QuizState::Complete;
                let summary = self.summary();
                tracing::info!(
                    "Quiz for '{}' complete: {}/{} ({:?})",
                    self.category,
                    summary.score,
                    summary.max_score,
                    summary.tier
                );
                Ok(QuizProgress::Complete { summary })
            }
        }
    }

    pub fn summary(&self) -> QuizSummary {
        let tier = ScoreTier::for_score(self.score);
        QuizSummary {
            score: self.score,
            max_score: POINTS_PER_CORRECT * self.questions.len() as u32,
            correct_answers: self.correct_answers,
            total_questions: self.questions.len(),
            tier,
            message: tier.message(),
        }
    }
}
