//! File-backed document store.

use std::path::{Path, PathBuf};

use choreboard_models::RootDocument;
use tracing::info;

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::Result;
use crate::DocumentStore;

/// Default name of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "db.json";

/// Keeps the root document in a single pretty-printed JSON file.
///
/// The file is created with the seed document on first load. Every save
/// rewrites the whole file atomically.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    /// Creates a store backed by the given file. Nothing is touched on disk
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileDocumentStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl DocumentStore for FileDocumentStore {
    fn load(&self) -> Result<RootDocument> {
        if let Some(document) = read_json_optional(&self.path)? {
            return Ok(document);
        }

        info!(path = %self.path.display(), "No data file found, writing seed document");
        let seed = RootDocument::seed();
        self.save(&seed)?;
        Ok(seed)
    }

    fn save(&self, document: &RootDocument) -> Result<()> {
        atomic_write_json(&self.path, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choreboard_models::{AssignedChore, ChoreType, CompletedLogEntry, MasterChore};
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_seed_file() {
        let dir = tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path().join("db.json"));
        assert!(!store.path().exists());

        let doc = store.load().unwrap();

        assert_eq!(doc, RootDocument::seed());
        assert!(store.path().exists());
        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk["users"][1]["name"], "Jordan");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path().join("db.json"));

        let mut doc = store.load().unwrap();
        doc.master_chores
            .push(MasterChore::new(3, "Take out trash", 10, ChoreType::Weekly));
        doc.current_week.assigned_chores.push(AssignedChore::new(3, 1));
        store.save(&doc).unwrap();

        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let dir = tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path().join("db.json"));

        let mut doc = store.load().unwrap();
        let mut entry = CompletedLogEntry::new(json!(1718000000123_i64), 1, 2, json!("T1"));
        entry.extra.insert("points".to_string(), json!(5));
        doc.current_week.completed_log.push(entry);
        store.save(&doc).unwrap();

        let first = store.load().unwrap();
        store.save(&first).unwrap();
        let first_bytes = fs::read_to_string(store.path()).unwrap();
        let second = store.load().unwrap();
        store.save(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), first_bytes);
    }

    #[test]
    fn test_load_invalid_json_is_corrupted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "not json at all").unwrap();

        let err = FileDocumentStore::new(&path).load().unwrap_err();
        assert!(err.is_corrupted());
        // The corrupted file is left alone.
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
    }

    #[test]
    fn test_load_wrong_shape_is_corrupted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, r#"{"users": [], "masterChores": []}"#).unwrap();

        let err = FileDocumentStore::new(&path).load().unwrap_err();
        assert!(err.is_corrupted());
    }
}
