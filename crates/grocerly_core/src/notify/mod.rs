//! Transient notification boundary.
//!
//! # Responsibility
//! - Define the `(message, severity)` contract session operations emit
//!   through.
//! - Provide an in-tree sink with the one-second display window.
//!
//! # Invariants
//! - Auto-clearing is the sink's responsibility, not the session's.
//! - At most one notice is visible at a time; a new notice replaces the
//!   previous one and restarts the window.

pub mod board;

pub use board::NoticeBoard;

/// Display severity; frontends typically map these to green/red styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Confirmations: item added, item updated.
    Success,
    /// Removals, clears and validation errors.
    Danger,
}

/// One transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Danger,
        }
    }
}

/// Sink accepting notices; display and expiry are the implementor's job.
pub trait NotificationSink {
    fn notify(&mut self, notice: Notice);
}
