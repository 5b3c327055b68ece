//! Session layer: the List Manager.
//!
//! # Responsibility
//! - Track the session mode (adding vs editing) as an explicit value.
//! - Turn UI events into pure transition steps, then apply them:
//!   persist, adopt the new collection, reconcile the surface, notify.
//!
//! # Invariants
//! - Every completed operation leaves the surface rows, the in-memory
//!   collection and the persisted collection in one-to-one agreement.
//! - A failed persist changes nothing observable.

pub mod manager;
pub mod state;
pub mod transition;

pub use manager::ListManager;
pub use state::SessionState;
pub use transition::{
    MSG_ALL_CLEARED, MSG_INVALID_ITEM, MSG_ITEM_ADDED, MSG_ITEM_REMOVED, MSG_ITEM_UPDATED,
};
