//! GraphQL query construction for the stats endpoint

use serde_json::{Value, json};

/// Single round-trip query: global per-difficulty question counts plus the
/// matched user's accepted and total submission counts.
pub const USER_PROGRESS_QUERY: &str = r"
query userSessionProgress($username: String!) {
    allQuestionsCount {
        difficulty
        count
    }
    matchedUser(username: $username) {
        submitStats {
            acSubmissionNum {
                difficulty
                count
                submissions
            }
            totalSubmissionNum {
                difficulty
                count
                submissions
            }
        }
    }
}
";

/// Build the POST body for a stats request
pub fn request_body(username: &str) -> Value {
    json!({
        "query": USER_PROGRESS_QUERY,
        "variables": { "username": username },
    })
}
