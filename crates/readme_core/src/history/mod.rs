//! Linear undo/redo history over document snapshots.
//!
//! # Responsibility
//! - Hold past/present/future snapshots and the transitions between them.
//! - Persist the present snapshot through a `DocumentStore`.
//! - Map editor key chords to history commands.
//!
//! # Invariants
//! - Only `commit` creates or destroys snapshots; `undo`/`redo` move them.
//! - A commit equal to `present` changes nothing.
//! - Persistence failures never reach the caller.

pub mod keymap;
pub mod manager;
pub mod state;

/// Storage key used when the embedding editor does not choose one.
pub const DEFAULT_STORAGE_KEY: &str = "readme-builder-elements";

/// Default cap on retained undo snapshots.
pub const DEFAULT_MAX_PAST: usize = 100;

/// History manager settings supplied by the embedding editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Key under which `present` is persisted.
    pub storage_key: String,
    /// Oldest undo snapshots beyond this count are dropped on commit.
    /// `None` keeps every snapshot.
    pub max_past: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_past: Some(DEFAULT_MAX_PAST),
        }
    }
}

impl HistoryConfig {
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_max_past(mut self, max_past: Option<usize>) -> Self {
        self.max_past = max_past;
        self
    }
}
