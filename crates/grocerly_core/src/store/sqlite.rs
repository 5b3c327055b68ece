//! Durable slot store backed by SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for slot storage.
//! - Configure connection pragmas and apply schema migrations before the
//!   store is handed out.
//!
//! # Invariants
//! - Returned stores have `foreign_keys=ON` and migrations fully applied.
//! - Slot writes are single-statement upserts, complete or absent.

use super::migrations::apply_migrations;
use super::{KeyValueStore, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// SQLite-backed slot store for durable single-machine persistence.
pub struct SqliteStore {
    conn: Connection,
}

/// Opens a slot database file and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<SqliteStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=file");

    let result = Connection::open(path)
        .map_err(Into::into)
        .and_then(bootstrap_connection);
    finish_open(result, "file", started_at)
}

/// Opens an in-memory slot database and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store_in_memory() -> StoreResult<SqliteStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=memory");

    let result = Connection::open_in_memory()
        .map_err(Into::into)
        .and_then(bootstrap_connection);
    finish_open(result, "memory", started_at)
}

fn bootstrap_connection(mut conn: Connection) -> StoreResult<SqliteStore> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(&mut conn)?;
    Ok(SqliteStore { conn })
}

fn finish_open(
    result: StoreResult<SqliteStore>,
    mode: &str,
    started_at: Instant,
) -> StoreResult<SqliteStore> {
    match &result {
        Ok(_) => info!(
            "event=store_open module=store status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=store status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
