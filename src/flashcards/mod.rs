//! Flashcard sets for FlashLearn
//!
//! This module provides:
//! - The `Flashcard` and `FlashcardSet` entities
//! - `SetStore`, the persisted collection of sets and its operations

pub mod models;
pub mod store;

pub use models::{Flashcard, FlashcardSet};
pub use store::{SetStore, SetStoreError};
