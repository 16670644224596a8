//! SQLite-backed document store.
//!
//! # Invariants
//! - One row per key; `save` upserts and refreshes `updated_at`.
//! - The connection handed in must already be migrated (`schema::open_store_*`).

use super::{decode_document, encode_document, DocumentStore, StoreResult};
use super::schema::{open_store_file, open_store_in_memory};
use crate::model::document::Document;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

pub struct SqliteDocumentStore {
    conn: Connection,
}

impl SqliteDocumentStore {
    /// Wraps a migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (and migrates) a store file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::new(open_store_file(path)?))
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::new(open_store_in_memory()?))
    }

    /// Borrows the underlying connection, e.g. for diagnostics.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn load(&self, key: &str) -> StoreResult<Option<Document>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        value
            .map(|text| decode_document(key, text.as_str()))
            .transpose()
    }

    fn save(&self, key: &str, document: &Document) -> StoreResult<()> {
        let text = encode_document(document)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, text],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
