use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::dashboard::render_dashboard;
use crate::notification::render_notification;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Split the terminal into input, stats region, and help line
        let layout = Layout::vertical([
            Constraint::Length(3), // Username field is fixed 3 lines
            Constraint::Min(7),    // Stats region takes the rest
            Constraint::Length(1), // Help line at bottom
        ])
        .split(frame.area());

        let input_area = layout[0];
        let stats_area = layout[1];
        let help_area = layout[2];

        self.render_input_field(frame, input_area);

        render_dashboard(frame, stats_area, &self.dashboard);

        self.render_help_line(frame, help_area);

        // Render last so it overlays the panes above
        render_notification(frame, &mut self.notification);
    }

    /// Render the username field, doubling as the busy indicator while a
    /// request is outstanding
    fn render_input_field(&mut self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let (title, border_color) = if self.search.is_busy() {
            (" Username - Searching... ", Color::Yellow)
        } else {
            (" Username ", Color::Cyan)
        };

        self.search.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.search.textarea, area);
    }

    /// Render the help line (bottom)
    fn render_help_line(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        // The refresh hint only makes sense once stats are on screen
        let help_text = if self.search.is_busy() {
            " Enter: New Search (cancels current) | Esc/Ctrl+C: Quit"
        } else if self.dashboard.is_active() {
            " Enter: Search | Ctrl+R: Refresh | Esc/Ctrl+C: Quit"
        } else {
            " Enter: Search | Esc/Ctrl+C: Quit"
        };

        let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

        frame.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{SubmissionCard, TierProgress, UserStats};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_initial_frame_shows_input_and_placeholder() {
        let mut app = App::new();
        let output = render_to_string(&mut app, 100, 24);

        assert!(output.contains("Username"));
        assert!(output.contains("Enter a username"));
        assert!(output.contains("Enter: Search"));
    }

    #[test]
    fn test_busy_state_relabels_the_input() {
        let mut app = App::new();
        let (request_tx, _request_rx) = std::sync::mpsc::channel();
        let (_response_tx, response_rx) = std::sync::mpsc::channel();
        app.search.set_channels(request_tx, response_rx);
        app.search.dispatch("alice".to_string());

        let output = render_to_string(&mut app, 100, 24);
        assert!(output.contains("Searching..."));
    }

    #[test]
    fn test_idle_state_has_no_busy_label() {
        let mut app = App::new();
        let output = render_to_string(&mut app, 100, 24);
        assert!(!output.contains("Searching..."));
    }

    #[test]
    fn test_frame_with_stats_shows_gauges_and_cards() {
        let mut app = App::new();
        app.dashboard.show(UserStats {
            easy: TierProgress::new(25, 100),
            medium: TierProgress::new(40, 200),
            hard: TierProgress::new(10, 50),
            cards: [
                SubmissionCard { label: "Total Submissions", value: 150 },
                SubmissionCard { label: "Easy Submissions", value: 40 },
                SubmissionCard { label: "Medium Submissions", value: 85 },
                SubmissionCard { label: "Hard Submissions", value: 25 },
            ],
        });

        let output = render_to_string(&mut app, 120, 24);
        assert!(output.contains("25/100"));
        assert!(output.contains("Total Submissions"));
        assert!(!output.contains("Enter a username"));
    }

    #[test]
    fn test_notification_overlays_the_frame() {
        let mut app = App::new();
        app.notification.show_error("Invalid username format");

        let output = render_to_string(&mut app, 100, 24);
        assert!(output.contains("Invalid username format"));
    }
}
