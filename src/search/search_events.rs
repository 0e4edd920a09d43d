//! Search event handling: submission and response channel polling

use std::sync::mpsc::TryRecvError;

use crate::api::worker::FetchResponse;
use crate::app::App;
use crate::username;

/// Run the validate → fetch flow for the current input.
///
/// Validation failures surface through the notifier and abort before any
/// request is dispatched.
pub fn submit(app: &mut App) {
    let raw = app.search.username().to_string();

    let name = match username::validate(&raw) {
        Ok(name) => name.to_string(),
        Err(e) => {
            app.notification.show_error(&e.to_string());
            return;
        }
    };

    #[cfg(debug_assertions)]
    log::debug!("submitting search for '{}'", name);

    if !app.search.dispatch(name) {
        app.notification.show_error("Fetch worker is not available");
    }
}

/// Poll the response channel for completed fetches.
///
/// Uses try_recv() for non-blocking polling from the event loop.
/// Returns true if any state changed.
pub fn poll_responses(app: &mut App) -> bool {
    let mut responses = Vec::new();
    let mut disconnected = false;

    if let Some(ref rx) = app.search.response_rx {
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
    }

    let had_responses = !responses.is_empty();

    for response in responses {
        process_response(app, response);
    }

    if disconnected && app.search.is_busy() {
        app.search.abort_in_flight();
        app.notification
            .show_error("Fetch worker disconnected unexpectedly");
        return true;
    }

    had_responses
}

/// Apply one worker response. Responses for superseded request ids are
/// dropped without touching the dashboard or the busy state.
fn process_response(app: &mut App, response: FetchResponse) {
    match response {
        FetchResponse::Stats { stats, request_id } => {
            if !app.search.finish_if_current(request_id) {
                return;
            }
            app.dashboard.show(*stats);
        }
        FetchResponse::Error {
            message,
            request_id,
        } => {
            if !app.search.finish_if_current(request_id) {
                return;
            }
            app.notification.show_error(&message);
        }
        FetchResponse::Cancelled { request_id } => {
            // Expected outcome of superseding a request; no message
            app.search.finish_if_current(request_id);
        }
    }
}
