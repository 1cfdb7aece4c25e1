//! Tauri commands for card operations

use tauri::State;
use uuid::Uuid;

use crate::flashcards::Flashcard;
use crate::AppState;

use super::set::{CommandError, CommandResult};

/// Create a new card at the end of a set
#[tauri::command]
pub fn create_card(
    state: State<AppState>,
    set_id: String,
    question: String,
    answer: String,
) -> CommandResult<Flashcard> {
    let mut sets = state.sets.lock().unwrap();
    let id = Uuid::parse_str(&set_id).map_err(|e| CommandError {
        message: format!("Invalid set ID: {}", e),
    })?;
    sets.create_card(id, &question, &answer).map_err(Into::into)
}

/// Replace a card's question and answer in place
#[tauri::command]
pub fn update_card(
    state: State<AppState>,
    set_id: String,
    card_id: String,
    question: String,
    answer: String,
) -> CommandResult<Option<Flashcard>> {
    let mut sets = state.sets.lock().unwrap();
    let st_id = Uuid::parse_str(&set_id).map_err(|e| CommandError {
        message: format!("Invalid set ID: {}", e),
    })?;
    let cd_id = Uuid::parse_str(&card_id).map_err(|e| CommandError {
        message: format!("Invalid card ID: {}", e),
    })?;
    sets.update_card(st_id, cd_id, &question, &answer)
        .map_err(Into::into)
}

/// Delete a card from a set
#[tauri::command]
pub fn delete_card(state: State<AppState>, set_id: String, card_id: String) -> CommandResult<()> {
    let mut sets = state.sets.lock().unwrap();
    let st_id = Uuid::parse_str(&set_id).map_err(|e| CommandError {
        message: format!("Invalid set ID: {}", e),
    })?;
    let cd_id = Uuid::parse_str(&card_id).map_err(|e| CommandError {
        message: format!("Invalid card ID: {}", e),
    })?;
    sets.delete_card(st_id, cd_id)?;
    Ok(())
}
