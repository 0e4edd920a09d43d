//! Notification state management

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Notification level - determines style and time-to-live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Warning (yellow) - e.g. an invalid config file at startup
    Warning,
    /// Error (red) - validation and fetch failures
    Error,
}

impl NotificationLevel {
    /// Time-to-live before the notification is removed automatically
    fn duration(self) -> Duration {
        match self {
            NotificationLevel::Warning => Duration::from_secs(5),
            NotificationLevel::Error => Duration::from_secs(3),
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationLevel::Warning => NotificationStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
            NotificationLevel::Error => NotificationStyle {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: &str, level: NotificationLevel) -> Self {
        Self {
            message: message.to_string(),
            style: level.style(),
            created_at: Instant::now(),
            duration: level.duration(),
        }
    }

    /// Check if notification has outlived its time-to-live
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Notification state manager for the application.
///
/// At most one notification is visible; a new call replaces the current one
/// and restarts the removal clock. There is no queue.
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a warning notification (yellow, 5s)
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationLevel::Warning));
    }

    /// Show an error notification (red, 3s)
    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationLevel::Error));
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Get current notification if visible
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Get current notification message if visible (test-only)
    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
