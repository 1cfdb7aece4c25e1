//! Tauri commands for set operations

use tauri::State;
use uuid::Uuid;

use crate::flashcards::{FlashcardSet, SetStoreError};
use crate::AppState;

#[derive(Debug, serde::Serialize)]
pub struct CommandError {
    pub message: String,
}

impl From<SetStoreError> for CommandError {
    fn from(err: SetStoreError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// List all flashcard sets
#[tauri::command]
pub fn list_sets(state: State<AppState>) -> CommandResult<Vec<FlashcardSet>> {
    let sets = state.sets.lock().unwrap();
    Ok(sets.list_sets())
}

/// Get a specific set
#[tauri::command]
pub fn get_set(state: State<AppState>, set_id: String) -> CommandResult<FlashcardSet> {
    let sets = state.sets.lock().unwrap();
    let id = Uuid::parse_str(&set_id).map_err(|e| CommandError {
        message: format!("Invalid set ID: {}", e),
    })?;
    sets.get_set(id).ok_or_else(|| CommandError {
        message: format!("Set not found: {}", set_id),
    })
}

/// Create a new, empty set
#[tauri::command]
pub fn create_set(state: State<AppState>, name: String) -> CommandResult<FlashcardSet> {
    let mut sets = state.sets.lock().unwrap();
    sets.create_set(&name).map_err(Into::into)
}

/// Delete a set and all its cards
#[tauri::command]
pub fn delete_set(state: State<AppState>, set_id: String) -> CommandResult<()> {
    let mut sets = state.sets.lock().unwrap();
    let id = Uuid::parse_str(&set_id).map_err(|e| CommandError {
        message: format!("Invalid set ID: {}", e),
    })?;
    sets.delete_set(id)?;
    Ok(())
}
