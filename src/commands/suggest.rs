//! Tauri command for the AI question suggestion flow

use tauri::State;
use uuid::Uuid;

use crate::suggest::SuggestionError;
use crate::AppState;

use super::set::CommandError;

impl From<SuggestionError> for CommandError {
    fn from(err: SuggestionError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// One suggested question, ready to pre-fill a new card draft
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedQuestion {
    pub suggested_question: String,
}

/// Ask the suggestion service for a question matching the set's name.
///
/// Fails without touching the collection; the caller decides whether to
/// save a card from the suggestion.
#[tauri::command]
pub async fn suggest_question(
    state: State<'_, AppState>,
    set_id: String,
) -> Result<SuggestedQuestion, CommandError> {
    let id = Uuid::parse_str(&set_id).map_err(|e| CommandError {
        message: format!("Invalid set ID: {}", e),
    })?;

    // Resolve the name and release the lock before awaiting the gateway
    let set_name = {
        let sets = state.sets.lock().unwrap();
        sets.get_set(id).map(|s| s.name)
    }
    .ok_or_else(|| CommandError {
        message: format!("Set not found: {}", set_id),
    })?;

    let suggested_question = state.suggester.suggest_question(&set_name).await?;
    Ok(SuggestedQuestion { suggested_question })
}
