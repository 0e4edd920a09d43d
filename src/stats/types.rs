//! Type definitions for display statistics

use std::fmt;

/// Difficulty tier used to bucket questions and submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Position of this tier in the upstream count arrays.
    /// Index 0 is the aggregate bucket.
    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Solved/total pair for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierProgress {
    pub solved: u32,
    pub total: u32,
}

impl TierProgress {
    pub fn new(solved: u32, total: u32) -> Self {
        Self { solved, total }
    }

    /// Completion percentage. May exceed 100 when the total is stale;
    /// a zero total yields zero rather than a division artifact.
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.solved) / f64::from(self.total) * 100.0
    }

    /// Gauge fill ratio, clamped to [0, 1] so degenerate data cannot
    /// panic the renderer
    pub fn ratio(self) -> f64 {
        (self.percent() / 100.0).clamp(0.0, 1.0)
    }

    /// "solved/total" text shown next to the gauge
    pub fn label(self) -> String {
        format!("{}/{}", self.solved, self.total)
    }
}

/// One summary tile in the card region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionCard {
    pub label: &'static str,
    pub value: u64,
}

/// Everything the dashboard renders for one user.
/// Replaced wholesale by the next successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub easy: TierProgress,
    pub medium: TierProgress,
    pub hard: TierProgress,
    pub cards: [SubmissionCard; 4],
}

impl UserStats {
    pub fn progress(&self, difficulty: Difficulty) -> TierProgress {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}
