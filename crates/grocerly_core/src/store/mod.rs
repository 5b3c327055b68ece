//! Key-value slot storage boundary.
//!
//! # Responsibility
//! - Define the persistent store contract the collection repository writes
//!   through: one named slot holding one UTF-8 text blob.
//! - Provide an in-memory backend for tests/probes and a SQLite backend for
//!   durable storage.
//!
//! # Invariants
//! - `set` replaces the slot content completely; there is no partial write
//!   observable between operations.
//! - SQLite connections are fully migrated before a store is handed out.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{open_store, open_store_in_memory, SqliteStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failures raised by store backends.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Escape hatch for non-SQLite backend implementations.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Backend(message) => write!(f, "store backend failure: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Persistent store contract: a named slot holding one text blob.
///
/// The session core only ever touches a single slot, written synchronously
/// and completely within each operation.
pub trait KeyValueStore {
    /// Reads the slot content, `None` when the slot was never written or
    /// has been removed.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the slot content.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the slot entirely; removing an absent slot is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
