//! Persistence layer for Choreboard.
//!
//! The whole state lives in one [`RootDocument`](choreboard_models::RootDocument)
//! behind the [`DocumentStore`] trait. [`FileDocumentStore`] keeps it in a
//! pretty-printed JSON file and replaces that file atomically (write to a temp
//! file, then rename) on every save. [`MemoryDocumentStore`] is the in-memory
//! double used in tests.
//!
//! # Example
//!
//! ```no_run
//! use choreboard_persistence::{DocumentStore, FileDocumentStore};
//!
//! let store = FileDocumentStore::new("db.json");
//!
//! // First load creates the file with the seed document
//! let mut doc = store.load().unwrap();
//! doc.current_week.prize = "Pizza night".to_string();
//! store.save(&doc).unwrap();
//! ```

pub mod atomic;
pub mod error;
pub mod file_store;
pub mod memory_store;

pub use error::{PersistenceError, Result};
pub use file_store::{FileDocumentStore, DEFAULT_DATA_FILE};
pub use memory_store::MemoryDocumentStore;

use choreboard_models::RootDocument;

/// Loads and saves the root document as a single unit.
///
/// Implementations provide no locking of their own; callers that share a
/// store between tasks must serialize read-modify-write cycles themselves.
pub trait DocumentStore: Send + Sync {
    /// Returns the current document, creating and persisting the seed
    /// document if the store is empty.
    fn load(&self) -> Result<RootDocument>;

    /// Replaces the stored document.
    fn save(&self, document: &RootDocument) -> Result<()>;
}
