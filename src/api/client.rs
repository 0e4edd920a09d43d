//! Async HTTP client for the stats endpoint
//!
//! One attempt per request, no retry, no explicit timeout. The upstream
//! GraphQL endpoint is called directly; cancellation is cooperative via
//! a CancellationToken checked at each await point.

use reqwest::Client;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::query::request_body;
use super::response::StatsResponse;
use crate::stats::{self, UserStats};

/// Default upstream GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql/";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unable to fetch data (status {0})")]
    Status(u16),

    #[error("User \"{0}\" not found on LeetCode")]
    UserNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// Stats API client. Owns the HTTP connection pool and the endpoint URL.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    endpoint: String,
}

impl StatsClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Fetch one user's stats and extract the display values.
    ///
    /// Races the HTTP call against the cancellation token so a superseded
    /// request stops consuming the connection as soon as possible.
    pub async fn fetch_stats(
        &self,
        username: &str,
        cancel_token: &CancellationToken,
    ) -> Result<UserStats, FetchError> {
        if cancel_token.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        log::debug!("fetching stats for '{}' from {}", username, self.endpoint);

        let request = self
            .http
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&request_body(username))
            .send();

        let response = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => return Err(FetchError::Cancelled),
            result = request => result.map_err(|e| FetchError::Network(e.to_string()))?,
        };

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => return Err(FetchError::Cancelled),
            result = response.json::<StatsResponse>() => {
                result.map_err(|e| FetchError::Parse(e.to_string()))?
            }
        };

        stats_from_response(body, username)
    }
}

/// Map a parsed body to display stats, treating an absent user record as
/// a not-found failure
fn stats_from_response(body: StatsResponse, username: &str) -> Result<UserStats, FetchError> {
    let data = body
        .data
        .filter(|d| d.matched_user.is_some())
        .ok_or_else(|| FetchError::UserNotFound(username.to_string()))?;

    Ok(stats::extract(&data))
}
