//! Render surface boundary and reconciliation.
//!
//! # Responsibility
//! - Define the minimal UI surface the session drives: a row list, one
//!   input field and one primary control caption.
//! - Rebuild the row list from the collection after every mutation.
//!
//! # Invariants
//! - Rows always mirror the collection one-to-one, in insertion order.
//! - Reconciliation is a pure function of the collection, so rendering the
//!   same collection twice yields the same rows.

use crate::model::item::{Item, ItemId};

pub mod memory;

pub use memory::{MemorySurface, Row};

/// UI surface contract the session core renders into.
///
/// The surface never interprets state; it displays exactly what it is told.
pub trait RenderSurface {
    /// Drops all rendered rows.
    fn reset_list(&mut self);

    /// Appends one row at the end of the list.
    fn append_row(&mut self, id: ItemId, label: &str);

    /// Mirrors the text input content.
    fn set_input(&mut self, text: &str);

    /// Sets the primary control caption ("Add" or "Done").
    fn set_control(&mut self, label: &str);
}

/// Rebuilds the surface row list from the collection.
pub fn reconcile<U: RenderSurface>(surface: &mut U, items: &[Item]) {
    surface.reset_list();
    for item in items {
        surface.append_row(item.id, &item.value);
    }
}
