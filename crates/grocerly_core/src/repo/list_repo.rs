//! Collection repository contract and key-value implementation.
//!
//! # Responsibility
//! - Serialize the ordered item collection to one JSON blob in one slot.
//! - Enforce record validity on both write and read paths.
//!
//! # Invariants
//! - The blob is a self-describing JSON array of `{id, value}` records in
//!   insertion order, with no envelope or version tag.
//! - `clear` removes the slot key itself, it does not write an empty array.
//! - Loaded collections never contain empty values or duplicate ids.

use crate::model::item::{Item, ItemId, ItemValidationError};
use crate::store::{KeyValueStore, StoreError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key holding the serialized collection.
pub const COLLECTION_KEY: &str = "grocery_items";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Store(StoreError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted collection: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Access contract for the persisted collection.
pub trait CollectionRepository {
    /// Loads the collection in stored order; an absent slot is an empty
    /// collection, not an error.
    fn load(&self) -> RepoResult<Vec<Item>>;

    /// Replaces the persisted collection with `items`, preserving order.
    fn save(&mut self, items: &[Item]) -> RepoResult<()>;

    /// Deletes the persisted collection entirely (full slot reset).
    fn clear(&mut self) -> RepoResult<()>;
}

/// Repository over any [`KeyValueStore`] backend.
pub struct KvCollectionRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvCollectionRepository<S> {
    /// Creates a repository over the default collection slot.
    pub fn new(store: S) -> Self {
        Self::with_key(store, COLLECTION_KEY)
    }

    /// Creates a repository over a caller-chosen slot key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> CollectionRepository for KvCollectionRepository<S> {
    fn load(&self) -> RepoResult<Vec<Item>> {
        let Some(blob) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let items: Vec<Item> = serde_json::from_str(&blob).map_err(|err| {
            RepoError::InvalidData(format!("slot `{}` is not an item array: {err}", self.key))
        })?;

        // A record that would be rejected on write is invalid data on read.
        check_collection(&items).map_err(|err| match err {
            RepoError::Validation(inner) => RepoError::InvalidData(format!(
                "slot `{}` holds an invalid record: {inner}",
                self.key
            )),
            other => other,
        })?;
        Ok(items)
    }

    fn save(&mut self, items: &[Item]) -> RepoResult<()> {
        check_collection(items)?;

        let blob = serde_json::to_string(items).map_err(|err| {
            RepoError::InvalidData(format!("collection failed to serialize: {err}"))
        })?;
        self.store.set(&self.key, &blob)?;
        Ok(())
    }

    fn clear(&mut self) -> RepoResult<()> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}

fn check_collection(items: &[Item]) -> RepoResult<()> {
    let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id) {
            return Err(RepoError::InvalidData(format!(
                "duplicate item id {}",
                item.id
            )));
        }
    }
    Ok(())
}
