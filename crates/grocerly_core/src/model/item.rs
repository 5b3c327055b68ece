//! Grocery item domain model.
//!
//! # Responsibility
//! - Define the record shape serialized into the persisted collection.
//! - Provide construction and rename helpers that keep labels valid.
//!
//! # Invariants
//! - `id` is stable for the item lifetime and never reused.
//! - `value` is trimmed and non-empty after every successful mutation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every item in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Validation failures raised by item constructors and renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Label is empty or whitespace-only after trimming.
    EmptyValue,
    /// Caller-provided id is the nil uuid.
    NilId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "item value must not be empty"),
            Self::NilId => write!(f, "item id must not be the nil uuid"),
        }
    }
}

impl Error for ItemValidationError {}

/// One grocery-list entry.
///
/// The wire shape is exactly `{ "id": ..., "value": ... }` with no envelope;
/// the persisted collection is an ordered JSON array of these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable random token assigned at creation time.
    pub id: ItemId,
    /// Free-form label, trimmed, non-empty.
    pub value: String,
}

impl Item {
    /// Creates an item from user input with a generated stable id.
    ///
    /// The label is trimmed before storage; empty or whitespace-only input
    /// is rejected rather than stored.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::new_v4(), value)
    }

    /// Creates an item with a caller-provided stable id.
    ///
    /// Used by load and test paths where identity already exists.
    pub fn with_id(id: ItemId, value: impl AsRef<str>) -> Result<Self, ItemValidationError> {
        if id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        let value = normalized_value(value.as_ref())?;
        Ok(Self { id, value })
    }

    /// Replaces the label in place, keeping the id untouched.
    ///
    /// On validation failure the current label is left unchanged.
    pub fn rename(&mut self, value: impl AsRef<str>) -> Result<(), ItemValidationError> {
        self.value = normalized_value(value.as_ref())?;
        Ok(())
    }

    /// Checks the label rule on an already-constructed record.
    ///
    /// Write paths call this before persistence; read paths call it to
    /// reject invalid persisted state instead of masking it.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.value.trim().is_empty() {
            return Err(ItemValidationError::EmptyValue);
        }
        Ok(())
    }
}

fn normalized_value(value: &str) -> Result<String, ItemValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ItemValidationError::EmptyValue);
    }
    Ok(trimmed.to_string())
}
