//! Search state: the username input and in-flight request bookkeeping

use std::sync::mpsc::{Receiver, Sender};

use ratatui::style::Style;
use tokio_util::sync::CancellationToken;
use tui_textarea::TextArea;

use crate::api::worker::{FetchRequest, FetchResponse};

/// A request handed to the worker and not yet resolved
#[derive(Debug)]
pub struct InFlight {
    pub request_id: u64,
    pub cancel_token: CancellationToken,
}

/// Input field plus the request lifecycle around it
pub struct SearchState {
    pub textarea: TextArea<'static>,
    pub in_flight: Option<InFlight>,
    next_request_id: u64,
    request_tx: Option<Sender<FetchRequest>>,
    pub(crate) response_rx: Option<Receiver<FetchResponse>>,
}

impl SearchState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            in_flight: None,
            next_request_id: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Wire the worker channels (called once at startup)
    pub fn set_channels(&mut self, tx: Sender<FetchRequest>, rx: Receiver<FetchResponse>) {
        self.request_tx = Some(tx);
        self.response_rx = Some(rx);
    }

    /// Current input text
    pub fn username(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Whether a request is outstanding (drives the busy indicator)
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Cancel any outstanding request and dispatch a new one.
    /// Returns false when no worker is wired or the worker is gone.
    pub fn dispatch(&mut self, username: String) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel_token.cancel();
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let cancel_token = CancellationToken::new();

        let sent = tx
            .send(FetchRequest::Stats {
                username,
                request_id,
                cancel_token: cancel_token.clone(),
            })
            .is_ok();

        if sent {
            self.in_flight = Some(InFlight {
                request_id,
                cancel_token,
            });
        }

        sent
    }

    /// Resolve the in-flight request if `request_id` still identifies it.
    /// Returns false for stale ids, which callers must ignore entirely.
    pub fn finish_if_current(&mut self, request_id: u64) -> bool {
        match &self.in_flight {
            Some(in_flight) if in_flight.request_id == request_id => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the in-flight marker without matching an id (worker gone)
    pub fn abort_in_flight(&mut self) {
        self.in_flight = None;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
