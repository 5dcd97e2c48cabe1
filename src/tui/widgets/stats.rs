// src/tui/widgets/stats.rs — The three summary cards.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::stats::SessionStats;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, stats: &SessionStats) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(f, chunks[0], "Total Sessions", stats.total_sessions.to_string());
    render_card(f, chunks[1], "Scams Detected", stats.total_scams.to_string());
    render_card(f, chunks[2], "Total Messages", stats.total_messages.to_string());
}

fn render_card(f: &mut Frame, area: Rect, label: &str, value: String) {
    let block = Block::default()
        .title(Span::styled(format!(" {label} "), Theme::text_dim()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let p = Paragraph::new(Line::from(Span::styled(value, Theme::stat_value())))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(p, area);
}
