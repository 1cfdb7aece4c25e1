use std::sync::Mutex;

#[cfg(feature = "gui")]
mod commands;
pub mod flashcards;
pub mod storage;
pub mod suggest;

use flashcards::SetStore;
#[cfg(feature = "gui")]
use storage::LocalStore;
use suggest::SuggestionClient;

pub struct AppState {
    pub sets: Mutex<SetStore>,
    pub suggester: SuggestionClient,
}

#[cfg(feature = "gui")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize storage
    let data_dir = LocalStore::default_data_dir().expect("Failed to get data directory");
    let sets =
        SetStore::open(LocalStore::new(data_dir)).expect("Failed to initialize flashcard storage");

    // Suggestion gateway configuration comes from the environment
    let suggester = SuggestionClient::from_env().expect("Failed to initialize suggestion client");

    let state = AppState {
        sets: Mutex::new(sets),
        suggester,
    };

    tauri::Builder::default()
        .manage(state)
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Set commands
            commands::list_sets,
            commands::get_set,
            commands::create_set,
            commands::delete_set,
            // Card commands
            commands::create_card,
            commands::update_card,
            commands::delete_card,
            // Suggestion commands
            commands::suggest_question,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
