//! Data models for flashcard sets

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question/answer card belonging to exactly one set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
            answer,
        }
    }
}

/// A named collection of flashcards; card order is display order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSet {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Flashcard>,
}

impl FlashcardSet {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            cards: Vec::new(),
        }
    }
}
