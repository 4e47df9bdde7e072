//! In-memory document store.

use std::sync::Mutex;

use choreboard_models::RootDocument;

use crate::error::Result;
use crate::DocumentStore;

/// Holds the root document in memory. Seeds itself on first load.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    document: Mutex<Option<RootDocument>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds the given document.
    pub fn with_document(document: RootDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
        }
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn load(&self) -> Result<RootDocument> {
        let mut guard = self.document.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.get_or_insert_with(RootDocument::seed).clone())
    }

    fn save(&self, document: &RootDocument) -> Result<()> {
        let mut guard = self.document.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(document.clone());
        Ok(())
    }
}
