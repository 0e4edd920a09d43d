//! Dashboard state management

use crate::stats::UserStats;

/// Holds the stats currently on display.
///
/// Populated only by a successful fetch; failures never touch it, so the
/// region keeps showing the previous user's data (or the placeholder).
#[derive(Debug, Default)]
pub struct DashboardState {
    stats: Option<UserStats>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed stats wholesale
    pub fn show(&mut self, stats: UserStats) {
        self.stats = Some(stats);
    }

    /// Whether the stats region has data to display
    pub fn is_active(&self) -> bool {
        self.stats.is_some()
    }

    pub fn stats(&self) -> Option<&UserStats> {
        self.stats.as_ref()
    }
}
