//! Session mode as an explicit value.
//!
//! One tagged variant passed through every transition; no hidden mode
//! flags or ambient globals.

use crate::model::item::ItemId;

/// Session mode: adding new items, or editing one existing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Submissions append new items.
    #[default]
    Default,
    /// Submissions replace the value of `target_id`.
    Editing { target_id: ItemId },
}

impl SessionState {
    /// Caption of the primary control, a pure function of the mode.
    pub fn control_label(&self) -> &'static str {
        match self {
            Self::Default => "Add",
            Self::Editing { .. } => "Done",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Id under edit, `None` in default mode.
    pub fn target(&self) -> Option<ItemId> {
        match self {
            Self::Default => None,
            Self::Editing { target_id } => Some(*target_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SessionState;
    use uuid::Uuid;

    #[test]
    fn control_label_follows_mode() {
        let id = Uuid::new_v4();
        assert_eq!(SessionState::Default.control_label(), "Add");
        assert_eq!(
            SessionState::Editing { target_id: id }.control_label(),
            "Done"
        );
    }

    #[test]
    fn target_is_only_set_while_editing() {
        let id = Uuid::new_v4();
        assert_eq!(SessionState::Default.target(), None);
        assert_eq!(SessionState::Editing { target_id: id }.target(), Some(id));
        assert!(!SessionState::Default.is_editing());
        assert!(SessionState::Editing { target_id: id }.is_editing());
    }
}
