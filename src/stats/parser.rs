//! Extraction of display statistics from the raw API response

use super::types::{Difficulty, SubmissionCard, TierProgress, UserStats};
use crate::api::response::StatsData;

/// Card labels in render order; positions match the upstream
/// totalSubmissionNum array (aggregate bucket first).
const CARD_LABELS: [&str; 4] = [
    "Total Submissions",
    "Easy Submissions",
    "Medium Submissions",
    "Hard Submissions",
];

/// Build display stats from a parsed response body.
///
/// Missing entries at any nesting level default to zero, so a partial
/// response still produces a complete set of gauges and cards.
pub fn extract(data: &StatsData) -> UserStats {
    let submit_stats = data
        .matched_user
        .as_ref()
        .and_then(|user| user.submit_stats.as_ref());

    let accepted = submit_stats
        .map(|s| s.ac_submission_num.as_slice())
        .unwrap_or(&[]);
    let total_submissions = submit_stats
        .map(|s| s.total_submission_num.as_slice())
        .unwrap_or(&[]);

    let tier = |difficulty: Difficulty| {
        let index = difficulty.index();
        let total = data
            .all_questions_count
            .get(index)
            .map(|c| c.count)
            .unwrap_or(0);
        let solved = accepted.get(index).map(|s| s.count).unwrap_or(0);
        TierProgress::new(solved, total)
    };

    let card = |index: usize| SubmissionCard {
        label: CARD_LABELS[index],
        value: total_submissions
            .get(index)
            .map(|s| s.submissions)
            .unwrap_or(0),
    };

    UserStats {
        easy: tier(Difficulty::Easy),
        medium: tier(Difficulty::Medium),
        hard: tier(Difficulty::Hard),
        cards: [card(0), card(1), card(2), card(3)],
    }
}
