use crate::dashboard::DashboardState;
use crate::notification::NotificationState;
use crate::search::SearchState;

/// Application state
pub struct App {
    pub search: SearchState,
    pub dashboard: DashboardState,
    pub notification: NotificationState,
    pub should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            search: SearchState::new(),
            dashboard: DashboardState::new(),
            notification: NotificationState::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the next loop iteration needs to redraw.
    /// A visible notification forces periodic redraws so its expiry is
    /// painted without further input.
    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.current().is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
