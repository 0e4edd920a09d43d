//! Stats API access
//!
//! Query construction, typed response parsing, the async HTTP client, and the
//! background worker thread that keeps network calls off the event loop.

pub mod client;
pub mod query;
pub mod response;
pub mod worker;

pub use client::{DEFAULT_ENDPOINT, FetchError, StatsClient};
