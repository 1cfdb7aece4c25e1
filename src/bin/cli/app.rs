use anyhow::{bail, Context, Result};

use flashlearn_lib::flashcards::{FlashcardSet, SetStore};
use flashlearn_lib::storage::LocalStore;

/// Shared application state for CLI commands
pub struct App {
    pub sets: SetStore,
}

impl App {
    /// Initialize from the default data directory
    pub fn new() -> Result<Self> {
        let data_dir = LocalStore::default_data_dir().context("Failed to get data directory")?;
        let sets = SetStore::open(LocalStore::new(data_dir))
            .context("Failed to open flashcard storage")?;

        Ok(Self { sets })
    }

    /// Find a set by name (case-insensitive prefix match)
    pub fn find_set(&self, name: &str) -> Result<FlashcardSet> {
        let sets = self.sets.list_sets();
        let name_lower = name.to_lowercase();

        // Exact match first
        if let Some(set) = sets.iter().find(|s| s.name.to_lowercase() == name_lower) {
            return Ok(set.clone());
        }

        // Prefix match
        let matches: Vec<&FlashcardSet> = sets
            .iter()
            .filter(|s| s.name.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!(
                "No set matching '{}'. Available sets:\n{}",
                name,
                sets.iter()
                    .map(|s| format!("  - {}", s.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous set name '{}'. Matches:\n{}",
                name,
                matches
                    .iter()
                    .map(|s| format!("  - {}", s.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}
