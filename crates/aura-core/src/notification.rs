//! Transient user notifications ("toasts")
//!
//! At most one notification is visible. Showing a new one replaces the
//! current one and restarts its display window.

use std::time::Duration;

use tokio::time::Instant;

/// How long a notification stays visible
pub const DISPLAY_WINDOW: Duration = Duration::from_secs(4);

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    /// Something worked
    Success,
    /// Something failed
    Error,
    /// Neutral information
    #[default]
    Info,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text
    pub message: String,
    /// Severity
    pub kind: NotificationKind,
    shown_at: Instant,
}

impl Notification {
    /// When the notification was shown
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

/// Single-slot notification holder
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    display_window: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    /// Create an empty center with the default display window
    pub fn new() -> Self {
        Self::with_display_window(DISPLAY_WINDOW)
    }

    /// Create an empty center with a custom display window
    pub fn with_display_window(display_window: Duration) -> Self {
        Self {
            current: None,
            display_window,
        }
    }

    /// Show a notification, replacing any visible one
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    /// Show a notification stamped with an explicit time
    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// The notification visible right now
    pub fn visible(&self) -> Option<&Notification> {
        self.visible_at(Instant::now())
    }

    /// The notification visible at `now`
    pub fn visible_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) < self.display_window)
    }

    /// Most recent notification, expired or not
    pub fn last(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Close the visible notification
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
