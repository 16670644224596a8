//! Schema bootstrap for the SQLite document store.
//!
//! # Invariants
//! - The applied schema step is mirrored in `PRAGMA user_version`.
//! - A connection is handed out only once `kv_store` has every column the
//!   store reads and writes.
//! - Files written by a newer build are refused, never downgraded.

use super::{StoreError, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Name of the single table backing the store.
pub const KV_TABLE: &str = "kv_store";

/// Columns `SqliteDocumentStore` relies on.
pub const KV_COLUMNS: [&str; 3] = ["key", "value", "updated_at"];

const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Ordered DDL steps; the index plus one is the schema version.
const SCHEMA_STEPS: &[&str] = &[include_str!("migrations/0001_kv_store.sql")];

/// Schema version written by this build.
pub fn schema_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Opens a store file, creating it when missing.
pub fn open_store_file(path: impl AsRef<Path>) -> StoreResult<Connection> {
    connect("file", || Connection::open(path))
}

/// Opens a throwaway in-memory store.
pub fn open_store_in_memory() -> StoreResult<Connection> {
    connect("memory", Connection::open_in_memory)
}

fn connect(
    mode: &'static str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<Connection> {
    let started_at = Instant::now();
    let result = open()
        .map_err(StoreError::from)
        .and_then(|mut conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            upgrade(&mut conn)?;
            verify_kv_table(&conn)?;
            Ok(conn)
        });

    let elapsed_ms = started_at.elapsed().as_millis();
    match &result {
        Ok(_) => info!("event=store_open module=store status=ok mode={mode} duration_ms={elapsed_ms}"),
        Err(err) => error!(
            "event=store_open module=store status=error mode={mode} duration_ms={elapsed_ms} error={err}"
        ),
    }
    result
}

/// Runs the schema steps the file has not seen yet, in one transaction.
fn upgrade(conn: &mut Connection) -> StoreResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let supported = schema_version();
    if found > supported {
        return Err(StoreError::UnsupportedSchemaVersion { found, supported });
    }

    let pending = &SCHEMA_STEPS[found as usize..];
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for sql in pending {
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", supported)?;
    tx.commit()?;

    info!("event=store_migrate module=store status=ok from={found} to={supported}");
    Ok(())
}

/// Confirms `kv_store` exists with every required column.
fn verify_kv_table(conn: &Connection) -> StoreResult<()> {
    let mut statement = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = statement
        .query_map([KV_TABLE], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;

    match KV_COLUMNS
        .into_iter()
        .find(|column| !present.iter().any(|name| name == column))
    {
        Some(column) => Err(StoreError::SchemaMismatch {
            table: KV_TABLE,
            missing_column: column,
        }),
        None => Ok(()),
    }
}
