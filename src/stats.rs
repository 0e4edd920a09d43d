//! Derived display statistics
//!
//! Turns the raw API response into the per-tier progress values and summary
//! cards the dashboard renders.

mod parser;
mod types;

pub use parser::extract;
pub use types::{Difficulty, SubmissionCard, TierProgress, UserStats};
