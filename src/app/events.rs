use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::App;
use crate::search;

/// Timeout for event polling - allows periodic refresh for notification
/// expiry and worker responses
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Drain completed fetches before processing new input
        if search::poll_responses(self) {
            self.mark_dirty();
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            // Check that it's a key press event to avoid duplicates
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event);
                self.mark_dirty();
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            // Both triggers feed the same validate -> fetch flow
            KeyCode::Enter => search::submit(self),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                search::submit(self);
            }
            _ => {
                self.search.textarea.input(key);
            }
        }
    }
}
