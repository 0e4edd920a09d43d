//! Typed mirror of the stats API response
//!
//! Every nested field is optional. Absent data is substituted with zero at the
//! extraction layer (`stats::extract`) rather than failing the parse, so a
//! partial response still renders.
//!
//! The upstream arrays use a positional convention: index 0 is the aggregate
//! bucket, indices 1/2/3 are easy/medium/hard.

use serde::Deserialize;

/// Top-level response envelope
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub data: Option<StatsData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    #[serde(default)]
    pub all_questions_count: Vec<QuestionCount>,
    pub matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionCount {
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub submit_stats: Option<SubmitStats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<SubmissionNum>,
    #[serde(default)]
    pub total_submission_num: Vec<SubmissionNum>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionNum {
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub submissions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "data": {
            "allQuestionsCount": [
                { "difficulty": "All", "count": 350 },
                { "difficulty": "Easy", "count": 100 },
                { "difficulty": "Medium", "count": 200 },
                { "difficulty": "Hard", "count": 50 }
            ],
            "matchedUser": {
                "submitStats": {
                    "acSubmissionNum": [
                        { "difficulty": "All", "count": 75, "submissions": 120 },
                        { "difficulty": "Easy", "count": 25, "submissions": 30 },
                        { "difficulty": "Medium", "count": 40, "submissions": 70 },
                        { "difficulty": "Hard", "count": 10, "submissions": 20 }
                    ],
                    "totalSubmissionNum": [
                        { "difficulty": "All", "count": 90, "submissions": 150 },
                        { "difficulty": "Easy", "count": 28, "submissions": 40 },
                        { "difficulty": "Medium", "count": 48, "submissions": 85 },
                        { "difficulty": "Hard", "count": 14, "submissions": 25 }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn test_full_response_parses() {
        let parsed: StatsResponse = serde_json::from_str(FULL_RESPONSE).unwrap();
        let data = parsed.data.unwrap();

        assert_eq!(data.all_questions_count.len(), 4);
        assert_eq!(data.all_questions_count[1].difficulty, "Easy");
        assert_eq!(data.all_questions_count[1].count, 100);

        let stats = data.matched_user.unwrap().submit_stats.unwrap();
        assert_eq!(stats.ac_submission_num[2].count, 40);
        assert_eq!(stats.total_submission_num[0].submissions, 150);
    }

    #[test]
    fn test_null_matched_user_parses_to_none() {
        let parsed: StatsResponse =
            serde_json::from_str(r#"{ "data": { "allQuestionsCount": [], "matchedUser": null } }"#)
                .unwrap();
        assert!(parsed.data.unwrap().matched_user.is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        // No arrays, no counts: everything falls back to empty/zero
        let parsed: StatsResponse =
            serde_json::from_str(r#"{ "data": { "matchedUser": { "submitStats": {} } } }"#)
                .unwrap();
        let data = parsed.data.unwrap();
        assert!(data.all_questions_count.is_empty());

        let stats = data.matched_user.unwrap().submit_stats.unwrap();
        assert!(stats.ac_submission_num.is_empty());
        assert!(stats.total_submission_num.is_empty());
    }

    #[test]
    fn test_empty_body_parses_to_no_data() {
        let parsed: StatsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_none());
    }
}
