//! Persistent key-value storage for the current document.
//!
//! # Responsibility
//! - Define the storage contract the history manager persists through.
//! - Fix the persisted layout: one JSON array of element objects per key.
//!
//! # Invariants
//! - A missing key reads as `None`, which callers treat as an empty document.
//! - Reads decode lossily; only non-JSON payloads are reported as corrupt.

use crate::model::document::Document;
use log::warn;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteDocumentStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The store file was written by a newer build.
    UnsupportedSchemaVersion {
        found: u32,
        supported: u32,
    },
    /// The store file lacks a column the store reads or writes.
    SchemaMismatch {
        table: &'static str,
        missing_column: &'static str,
    },
    Serialize(serde_json::Error),
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "store schema version {found} is newer than supported {supported}"
            ),
            Self::SchemaMismatch {
                table,
                missing_column,
            } => write!(f, "store table `{table}` has no `{missing_column}` column"),
            Self::Serialize(err) => write!(f, "failed to serialize document: {err}"),
            Self::Corrupt { key, source } => {
                write!(f, "stored value under `{key}` is not valid JSON: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
            Self::UnsupportedSchemaVersion { .. } | Self::SchemaMismatch { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Client-scoped key-value store holding serialized documents.
pub trait DocumentStore {
    /// Reads the document stored under `key`.
    fn load(&self, key: &str) -> StoreResult<Option<Document>>;
    /// Replaces the document stored under `key`.
    fn save(&self, key: &str, document: &Document) -> StoreResult<()>;
    /// Erases `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn load(&self, key: &str) -> StoreResult<Option<Document>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, document: &Document) -> StoreResult<()> {
        (**self).save(key, document)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// Serializes a document into its persisted text form.
pub fn encode_document(document: &Document) -> StoreResult<String> {
    serde_json::to_string(document).map_err(StoreError::Serialize)
}

/// Parses a persisted value, skipping malformed elements.
pub fn decode_document(key: &str, text: &str) -> StoreResult<Document> {
    let lossy = Document::from_json_str_lossy(text).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })?;
    if !lossy.skipped.is_empty() {
        warn!(
            "event=store_decode module=store status=partial key={key} skipped={}",
            lossy.skipped.len()
        );
    }
    Ok(lossy.document)
}

/// Process-local store, used for tests and for sessions without a disk.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw text under `key`, bypassing serialization.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.borrow_mut().insert(key.into(), value.into());
    }

    /// Returns the raw persisted text under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn load(&self, key: &str) -> StoreResult<Option<Document>> {
        match self.values.borrow().get(key) {
            Some(text) => decode_document(key, text).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, document: &Document) -> StoreResult<()> {
        let text = encode_document(document)?;
        self.values.borrow_mut().insert(key.to_string(), text);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
