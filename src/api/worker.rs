//! Fetch worker thread
//!
//! Runs stats requests on a dedicated thread so the event loop never blocks
//! on the network. Receives requests via channel and reports results back
//! tagged with their request id, letting the event loop discard responses
//! that a newer request has superseded.
//!
//! Uses a current-thread tokio runtime for the async HTTP call with
//! cancellation support. Includes panic handling to prevent TUI corruption.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::client::{FetchError, StatsClient};
use crate::stats::UserStats;

/// Request sent from the event loop to the worker
pub enum FetchRequest {
    Stats {
        username: String,
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Response sent from the worker back to the event loop
#[derive(Debug)]
pub enum FetchResponse {
    Stats {
        stats: Box<UserStats>,
        request_id: u64,
    },
    Error {
        message: String,
        request_id: u64,
    },
    Cancelled {
        request_id: u64,
    },
}

/// Spawn the fetch worker thread.
///
/// The thread owns the HTTP client and a current-thread tokio runtime, and
/// processes requests until the request channel is closed. If it dies, the
/// event loop notices the disconnected response channel and recovers.
pub fn spawn_worker(
    endpoint: String,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        // The default panic hook prints to stderr which corrupts the TUI
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(|panic_info| {
            log::error!("fetch worker panic: {}", panic_info);
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(
                StatsClient::new(endpoint),
                request_rx,
                response_tx,
            ));
        }));

        panic::set_hook(prev_hook);

        if result.is_err() {
            log::error!("fetch worker thread panicked");
        }
    });
}

/// Main async worker loop - processes requests until the channel is closed.
/// Blocking `recv()` is fine here since we're in a dedicated thread.
async fn worker_loop(
    client: StatsClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            FetchRequest::Stats {
                username,
                request_id,
                cancel_token,
            } => {
                handle_fetch(&client, &username, request_id, cancel_token, &response_tx).await;
            }
        }
    }
}

async fn handle_fetch(
    client: &StatsClient,
    username: &str,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: &Sender<FetchResponse>,
) {
    // A request superseded while still queued never touches the network
    if cancel_token.is_cancelled() {
        let _ = response_tx.send(FetchResponse::Cancelled { request_id });
        return;
    }

    match client.fetch_stats(username, &cancel_token).await {
        Ok(stats) => {
            let _ = response_tx.send(FetchResponse::Stats {
                stats: Box::new(stats),
                request_id,
            });
        }
        Err(FetchError::Cancelled) => {
            let _ = response_tx.send(FetchResponse::Cancelled { request_id });
        }
        Err(e) => {
            log::debug!("request {} failed: {}", request_id, e);
            let _ = response_tx.send(FetchResponse::Error {
                message: e.to_string(),
                request_id,
            });
        }
    }
}
