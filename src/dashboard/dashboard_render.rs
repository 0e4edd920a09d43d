//! Dashboard rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::dashboard_state::DashboardState;
use crate::stats::{Difficulty, UserStats};

const GAUGE_REGION_HEIGHT: u16 = 4;
const CARD_REGION_HEIGHT: u16 = 3;

fn tier_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

/// Render the stats region: progress gauges on top, summary cards below.
/// Before the first successful fetch the region shows a placeholder hint.
pub fn render_dashboard(frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let Some(stats) = dashboard.stats() else {
        let hint = Paragraph::new("Enter a username and press Enter to load stats")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Progress "));
        frame.render_widget(hint, area);
        return;
    };

    let layout = Layout::vertical([
        Constraint::Length(GAUGE_REGION_HEIGHT),
        Constraint::Length(CARD_REGION_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);

    render_progress(frame, layout[0], stats);
    render_cards(frame, layout[1], stats);
}

/// Three gauges, one per difficulty tier, each with a solved/total line
fn render_progress(frame: &mut Frame, area: Rect, stats: &UserStats) {
    let block = Block::default().borders(Borders::ALL).title(" Solved ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);

    for (column, difficulty) in columns.iter().zip(Difficulty::ALL) {
        let progress = stats.progress(difficulty);
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(*column);

        // Fill ratio is clamped; the text reports the raw percentage
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(tier_color(difficulty)))
            .ratio(progress.ratio())
            .label(format!("{} {:.1}%", difficulty, progress.percent()));
        frame.render_widget(gauge, rows[0]);

        let label = Paragraph::new(progress.label()).alignment(Alignment::Center);
        frame.render_widget(label, rows[1]);
    }
}

/// Four summary tiles, rebuilt from the current data on every draw
fn render_cards(frame: &mut Frame, area: Rect, stats: &UserStats) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (column, card) in columns.iter().zip(&stats.cards) {
        let tile = Paragraph::new(card.value.to_string())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", card.label)),
            );
        frame.render_widget(tile, *column);
    }
}
