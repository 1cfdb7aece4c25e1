//! Key-value adapter over JSON files in the app data directory
//!
//! Each key is persisted as `{key}.json`. Reads never fail: a missing,
//! unreadable, or corrupt value yields the caller's fallback. Writes
//! replace the whole file, so the last writer wins.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("flashlearn"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Create the data directory if it does not exist yet
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Read the value stored under `key`, or `fallback` when the value is
    /// absent or does not deserialize as `T`. Corrupt data is discarded.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let path = self.key_path(key);
        if !path.exists() {
            return fallback;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Failed to read {}: {}", path.display(), err);
                return fallback;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Discarding corrupt value under key '{}': {}", key, err);
                fallback
            }
        }
    }

    /// Serialize `value` and persist it under `key`
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.init()?;
        let content = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> LocalStore {
        LocalStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn test_read_missing_key_returns_fallback() {
        let dir = TempDir::new().unwrap();
        let values: Vec<String> = store(&dir).read("absent", Vec::new());
        assert!(values.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let values = vec!["alpha".to_string(), "beta".to_string()];
        store.write("values", &values).unwrap();

        let loaded: Vec<String> = store.read("values", Vec::new());
        assert_eq!(loaded, values);
    }

    #[test]
    fn test_read_corrupt_value_returns_fallback() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        std::fs::write(dir.path().join("values.json"), "{not json at all").unwrap();

        let loaded: Vec<String> = store.read("values", vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_read_foreign_shape_returns_fallback() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        // Valid JSON, wrong shape for the requested type
        std::fs::write(dir.path().join("values.json"), r#"{"hello": 1}"#).unwrap();

        let loaded: Vec<String> = store.read("values", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_write_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.write("value", &vec![1, 2, 3]).unwrap();
        store.write("value", &vec![4]).unwrap();

        let loaded: Vec<i32> = store.read("value", Vec::new());
        assert_eq!(loaded, vec![4]);
    }
}
