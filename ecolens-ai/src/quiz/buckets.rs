// Broad quiz buckets for categories without bank questions

use crate::knowledge::quiz_bank::{
    QuestionTemplate, ANIMAL_QUESTIONS, FLOWER_QUESTIONS, HARMFUL_QUESTIONS, TREE_QUESTIONS,
    WATER_QUESTIONS,
};
use crate::narrative::classify::{
    is_harmful_object, mentions_any, Domain, ANIMALS_AND_REPTILES, FLOWERS, WATERS,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizBucket {
    Tree,
    Flower,
    Water,
    Animal,
    Harmful,
}

impl QuizBucket {
    /// Bucket for a category; anything unrecognised gets the tree set
    pub fn of(category: &str) -> QuizBucket {
        if is_harmful_object(category) {
            return QuizBucket::Harmful;
        }
        if mentions_any(category, FLOWERS) {
            return QuizBucket::Flower;
        }
        if mentions_any(category, WATERS) {
            return QuizBucket::Water;
        }
        if mentions_any(category, ANIMALS_AND_REPTILES)
            || matches!(Domain::of(category), Some(Domain::Insects | Domain::Birds | Domain::Animals))
        {
            return QuizBucket::Animal;
        }
        QuizBucket::Tree
    }

    pub fn questions(&self) -> &'static [QuestionTemplate] {
        match self {
            QuizBucket::Tree => TREE_QUESTIONS,
            QuizBucket::Flower => FLOWER_QUESTIONS,
            QuizBucket::Water => WATER_QUESTIONS,
            QuizBucket::Animal => ANIMAL_QUESTIONS,
            QuizBucket::Harmful => HARMFUL_QUESTIONS,
        }
    }
}
