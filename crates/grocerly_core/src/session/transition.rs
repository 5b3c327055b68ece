//! Pure transition steps for every session operation.
//!
//! # Responsibility
//! - Compute, without side effects, what each operation does to the
//!   collection, the session mode, the input field and the notice.
//!
//! # Invariants
//! - Functions here never touch storage or the surface; the manager owns
//!   effect ordering.
//! - Precondition failures (empty add input, unknown target id) produce a
//!   no-op step, never an error.

use crate::model::item::{Item, ItemId};
use crate::notify::Notice;
use crate::session::state::SessionState;

pub const MSG_ITEM_ADDED: &str = "Item added successfully";
pub const MSG_ITEM_UPDATED: &str = "Item updated successfully";
pub const MSG_ITEM_REMOVED: &str = "Item removed";
pub const MSG_ALL_CLEARED: &str = "All items cleared";
pub const MSG_INVALID_ITEM: &str = "Please enter a valid item";

/// Persistence effect a step requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    /// No storage write.
    None,
    /// Replace the persisted collection with the step's collection.
    Save,
    /// Remove the collection slot entirely.
    Reset,
}

/// Outcome of one operation, ready to be applied by the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Collection after the operation, in insertion order.
    pub items: Vec<Item>,
    /// Session mode after the operation.
    pub state: SessionState,
    /// Input field content, `None` to leave it as typed.
    pub input: Option<String>,
    /// Transient notice to emit, if any.
    pub notice: Option<Notice>,
    /// Storage effect to perform before anything becomes observable.
    pub persist: Persist,
}

impl Step {
    /// Step that changes nothing: preconditions failed.
    fn unchanged(items: &[Item], state: SessionState) -> Self {
        Self {
            items: items.to_vec(),
            state,
            input: None,
            notice: None,
            persist: Persist::None,
        }
    }

    /// Step restoring the default posture after a completed mutation.
    fn completed(items: Vec<Item>, notice: Notice, persist: Persist) -> Self {
        Self {
            items,
            state: SessionState::Default,
            input: Some(String::new()),
            notice: Some(notice),
            persist,
        }
    }
}

/// Routes the primary control: append in default mode, commit while
/// editing. The mode decides, not a rebound handler.
pub fn submit(state: SessionState, items: &[Item], text: &str) -> Step {
    match state {
        SessionState::Default => add(items, text),
        SessionState::Editing { target_id } => commit_edit(items, target_id, text),
    }
}

/// Appends a new item. Empty input is swallowed silently; [`commit_edit`]
/// instead raises a notice. The asymmetry is deliberate.
pub fn add(items: &[Item], text: &str) -> Step {
    match Item::new(text) {
        Ok(item) => {
            let mut next = items.to_vec();
            next.push(item);
            Step::completed(next, Notice::success(MSG_ITEM_ADDED), Persist::Save)
        }
        Err(_) => Step::unchanged(items, SessionState::Default),
    }
}

/// Enters edit mode for `target_id`, populating the input with the current
/// value. Unknown ids leave the session untouched. Re-targeting while
/// already editing another item is allowed.
pub fn begin_edit(state: SessionState, items: &[Item], target_id: ItemId) -> Step {
    match items.iter().find(|item| item.id == target_id) {
        Some(item) => Step {
            items: items.to_vec(),
            state: SessionState::Editing { target_id },
            input: Some(item.value.clone()),
            notice: None,
            persist: Persist::None,
        },
        None => Step::unchanged(items, state),
    }
}

/// Replaces the value of the item under edit, keeping id and position.
///
/// Empty input keeps the session in edit mode and emits a validation
/// notice (the self-loop of the state machine). A target that vanished
/// drops back to default mode without writing.
pub fn commit_edit(items: &[Item], target_id: ItemId, text: &str) -> Step {
    let Some(position) = items.iter().position(|item| item.id == target_id) else {
        return Step {
            items: items.to_vec(),
            state: SessionState::Default,
            input: Some(String::new()),
            notice: None,
            persist: Persist::None,
        };
    };

    let mut next = items.to_vec();
    match next[position].rename(text) {
        Ok(()) => Step::completed(next, Notice::success(MSG_ITEM_UPDATED), Persist::Save),
        Err(_) => Step {
            items: items.to_vec(),
            state: SessionState::Editing { target_id },
            input: None,
            notice: Some(Notice::danger(MSG_INVALID_ITEM)),
            persist: Persist::None,
        },
    }
}

/// Removes one item by id, aborting any in-progress edit. Unknown ids
/// leave the session untouched.
pub fn delete(state: SessionState, items: &[Item], target_id: ItemId) -> Step {
    if !items.iter().any(|item| item.id == target_id) {
        return Step::unchanged(items, state);
    }

    let next: Vec<Item> = items
        .iter()
        .filter(|item| item.id != target_id)
        .cloned()
        .collect();
    Step::completed(next, Notice::danger(MSG_ITEM_REMOVED), Persist::Save)
}

/// Empties the collection and resets the slot key.
pub fn clear_all() -> Step {
    Step::completed(Vec::new(), Notice::danger(MSG_ALL_CLEARED), Persist::Reset)
}
