//! Notice board sink with a fixed display window.

use super::{Notice, NotificationSink};
use std::time::{Duration, Instant};

/// How long a notice stays visible before it clears itself.
pub const DISPLAY_WINDOW: Duration = Duration::from_secs(1);

/// Holds at most one notice and clears it after the display window.
///
/// Expiry is evaluated lazily on read, so no timer thread exists.
#[derive(Debug)]
pub struct NoticeBoard {
    window: Duration,
    posted: Option<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::with_window(DISPLAY_WINDOW)
    }

    /// Board with a caller-chosen display window, mostly for tests.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            posted: None,
        }
    }

    /// Currently visible notice, `None` once the window has elapsed.
    pub fn current(&self) -> Option<&Notice> {
        self.posted
            .as_ref()
            .filter(|(_, at)| at.elapsed() < self.window)
            .map(|(notice, _)| notice)
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for NoticeBoard {
    fn notify(&mut self, notice: Notice) {
        self.posted = Some((notice, Instant::now()));
    }
}
