//! Persisted collection of flashcard sets
//!
//! The whole collection lives under one storage key as a JSON array of
//! sets. Every mutation updates the in-memory collection first, then
//! rewrites the full array, so reads within a session always observe the
//! latest write. Concurrent writers are not coordinated; the last writer
//! wins.

use thiserror::Error;
use uuid::Uuid;

use crate::storage::{LocalStore, StorageError};

use super::models::{Flashcard, FlashcardSet};

/// Storage key for the set collection
const SETS_KEY: &str = "sets";

#[derive(Error, Debug)]
pub enum SetStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Set name must not be empty")]
    EmptyName,

    #[error("Card question must not be empty")]
    EmptyQuestion,

    #[error("Card answer must not be empty")]
    EmptyAnswer,

    #[error("Set not found: {0}")]
    SetNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, SetStoreError>;

/// Storage manager for the flashcard set collection
pub struct SetStore {
    store: LocalStore,
    sets: Vec<FlashcardSet>,
}

impl SetStore {
    /// Open the collection, loading whatever is persisted under the sets
    /// key. Corrupt or foreign data starts the session with an empty
    /// collection.
    pub fn open(store: LocalStore) -> Result<Self> {
        store.init()?;
        let sets = store.read(SETS_KEY, Vec::new());
        Ok(Self { store, sets })
    }

    fn save(&self) -> Result<()> {
        self.store.write(SETS_KEY, &self.sets)?;
        Ok(())
    }

    /// List all sets in creation order
    pub fn list_sets(&self) -> Vec<FlashcardSet> {
        self.sets.clone()
    }

    /// Get a specific set
    pub fn get_set(&self, set_id: Uuid) -> Option<FlashcardSet> {
        self.sets.iter().find(|s| s.id == set_id).cloned()
    }

    /// Create a new, empty set
    pub fn create_set(&mut self, name: &str) -> Result<FlashcardSet> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SetStoreError::EmptyName);
        }

        let set = FlashcardSet::new(name.to_string());
        self.sets.push(set.clone());
        self.save()?;

        Ok(set)
    }

    /// Delete a set and all its cards. Deleting an unknown id is a no-op.
    pub fn delete_set(&mut self, set_id: Uuid) -> Result<bool> {
        let before = self.sets.len();
        self.sets.retain(|s| s.id != set_id);
        if self.sets.len() == before {
            log::debug!("delete_set: set {} not found, ignoring", set_id);
            return Ok(false);
        }

        self.save()?;
        Ok(true)
    }

    /// Create a new card at the end of a set
    pub fn create_card(&mut self, set_id: Uuid, question: &str, answer: &str) -> Result<Flashcard> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(SetStoreError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(SetStoreError::EmptyAnswer);
        }

        let card = {
            let set = self
                .sets
                .iter_mut()
                .find(|s| s.id == set_id)
                .ok_or(SetStoreError::SetNotFound(set_id))?;
            let card = Flashcard::new(question.to_string(), answer.to_string());
            set.cards.push(card.clone());
            card
        };

        self.save()?;
        Ok(card)
    }

    /// Replace a card's question and answer in place. The card keeps its
    /// id and position. Unknown ids are a no-op.
    pub fn update_card(
        &mut self,
        set_id: Uuid,
        card_id: Uuid,
        question: &str,
        answer: &str,
    ) -> Result<Option<Flashcard>> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(SetStoreError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(SetStoreError::EmptyAnswer);
        }

        let updated = {
            let card = self
                .sets
                .iter_mut()
                .find(|s| s.id == set_id)
                .and_then(|s| s.cards.iter_mut().find(|c| c.id == card_id));

            match card {
                Some(card) => {
                    card.question = question.to_string();
                    card.answer = answer.to_string();
                    Some(card.clone())
                }
                None => None,
            }
        };

        match updated {
            Some(card) => {
                self.save()?;
                Ok(Some(card))
            }
            None => {
                log::debug!(
                    "update_card: card {} not found in set {}, ignoring",
                    card_id,
                    set_id
                );
                Ok(None)
            }
        }
    }

    /// Remove a card from a set, preserving the order of the remaining
    /// cards. Unknown ids are a no-op.
    pub fn delete_card(&mut self, set_id: Uuid, card_id: Uuid) -> Result<bool> {
        let removed = match self.sets.iter_mut().find(|s| s.id == set_id) {
            Some(set) => {
                let before = set.cards.len();
                set.cards.retain(|c| c.id != card_id);
                set.cards.len() != before
            }
            None => {
                log::debug!("delete_card: set {} not found, ignoring", set_id);
                return Ok(false);
            }
        };

        if !removed {
            log::debug!(
                "delete_card: card {} not found in set {}, ignoring",
                card_id,
                set_id
            );
            return Ok(false);
        }

        self.save()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> SetStore {
        SetStore::open(LocalStore::new(dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_create_set() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("Biology").unwrap();

        assert_eq!(set.name, "Biology");
        assert!(set.cards.is_empty());
        assert_eq!(store.list_sets().len(), 1);
        assert_eq!(store.get_set(set.id).unwrap().name, "Biology");
    }

    #[test]
    fn test_create_set_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        assert!(matches!(store.create_set(""), Err(SetStoreError::EmptyName)));
        assert!(matches!(store.create_set("   "), Err(SetStoreError::EmptyName)));
        assert!(store.list_sets().is_empty());
    }

    #[test]
    fn test_create_set_trims_name() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("  Math  ").unwrap();
        assert_eq!(set.name, "Math");
    }

    #[test]
    fn test_set_ids_are_unique() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let a = store.create_set("A").unwrap();
        let b = store.create_set("B").unwrap();
        let c = store.create_set("C").unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_delete_set_removes_cards_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("Biology").unwrap();
        let card = store
            .create_card(set.id, "Powerhouse of the cell?", "Mitochondria")
            .unwrap();
        let other = store.create_set("Math").unwrap();

        assert!(store.delete_set(set.id).unwrap());
        assert!(store.get_set(set.id).is_none());
        assert_eq!(store.list_sets().len(), 1);
        assert_eq!(store.list_sets()[0].name, "Math");

        // Second delete and card delete against the removed set are no-ops
        assert!(!store.delete_set(set.id).unwrap());
        assert!(!store.delete_card(set.id, card.id).unwrap());
        assert_eq!(store.get_set(other.id).unwrap().name, "Math");
    }

    #[test]
    fn test_create_card_appends_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("History").unwrap();
        let first = store.create_card(set.id, "Q1", "A1").unwrap();
        let second = store.create_card(set.id, "Q2", "A2").unwrap();

        let cards = store.get_set(set.id).unwrap().cards;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, first.id);
        assert_eq!(cards[1].id, second.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_create_card_rejects_empty_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("History").unwrap();

        assert!(matches!(
            store.create_card(set.id, "  ", "A"),
            Err(SetStoreError::EmptyQuestion)
        ));
        assert!(matches!(
            store.create_card(set.id, "Q", ""),
            Err(SetStoreError::EmptyAnswer)
        ));
        assert!(store.get_set(set.id).unwrap().cards.is_empty());
    }

    #[test]
    fn test_create_card_requires_existing_set() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let missing = Uuid::new_v4();
        assert!(matches!(
            store.create_card(missing, "Q", "A"),
            Err(SetStoreError::SetNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn test_update_card_preserves_id_and_position() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("Biology").unwrap();
        let first = store.create_card(set.id, "Q1", "A1").unwrap();
        let second = store.create_card(set.id, "Q2", "A2").unwrap();
        store.create_card(set.id, "Q3", "A3").unwrap();

        let updated = store
            .update_card(set.id, second.id, "New question", "New answer")
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, second.id);
        assert_eq!(updated.question, "New question");
        assert_eq!(updated.answer, "New answer");

        let cards = store.get_set(set.id).unwrap().cards;
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].id, first.id);
        assert_eq!(cards[1].id, second.id);
        assert_eq!(cards[1].question, "New question");
    }

    #[test]
    fn test_update_card_unknown_ids_are_noops() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("Biology").unwrap();
        store.create_card(set.id, "Q1", "A1").unwrap();

        let result = store
            .update_card(set.id, Uuid::new_v4(), "Q", "A")
            .unwrap();
        assert!(result.is_none());

        let result = store
            .update_card(Uuid::new_v4(), Uuid::new_v4(), "Q", "A")
            .unwrap();
        assert!(result.is_none());

        let cards = store.get_set(set.id).unwrap().cards;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "Q1");
    }

    #[test]
    fn test_delete_card_preserves_order_of_rest() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let set = store.create_set("Biology").unwrap();
        let first = store.create_card(set.id, "Q1", "A1").unwrap();
        let second = store.create_card(set.id, "Q2", "A2").unwrap();
        let third = store.create_card(set.id, "Q3", "A3").unwrap();

        assert!(store.delete_card(set.id, second.id).unwrap());

        let cards = store.get_set(set.id).unwrap().cards;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, first.id);
        assert_eq!(cards[1].id, third.id);

        // Deleting again is a no-op
        assert!(!store.delete_card(set.id, second.id).unwrap());
        assert_eq!(store.get_set(set.id).unwrap().cards.len(), 2);
    }

    #[test]
    fn test_collection_persists_across_reopen() {
        let dir = TempDir::new().unwrap();

        let (set_id, card_id) = {
            let mut store = open_store(&dir);
            let set = store.create_set("Biology").unwrap();
            let card = store
                .create_card(set.id, "Powerhouse of the cell?", "Mitochondria")
                .unwrap();
            (set.id, card.id)
        };

        let store = open_store(&dir);
        let sets = store.list_sets();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id, set_id);
        assert_eq!(sets[0].name, "Biology");
        assert_eq!(sets[0].cards.len(), 1);
        assert_eq!(sets[0].cards[0].id, card_id);
        assert_eq!(sets[0].cards[0].question, "Powerhouse of the cell?");
        assert_eq!(sets[0].cards[0].answer, "Mitochondria");
    }

    #[test]
    fn test_open_with_corrupt_data_starts_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sets.json"), "corrupt {{{").unwrap();

        let mut store = open_store(&dir);
        assert!(store.list_sets().is_empty());

        // The collection is usable and the next write replaces the corrupt file
        store.create_set("Fresh").unwrap();
        let reopened = open_store(&dir);
        assert_eq!(reopened.list_sets().len(), 1);
    }
}
