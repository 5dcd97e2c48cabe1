// src/tui/widgets/search.rs — Query input line.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, query: &str, editing: bool) {
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(if editing {
            Theme::border_focus()
        } else {
            Theme::border()
        });

    let line = if query.is_empty() && !editing {
        Line::from(Span::styled(
            "Filter by phone numbers, UPI IDs, or any keyword (press /)",
            Theme::text_dim(),
        ))
    } else if editing {
        Line::from(vec![
            Span::styled(query.to_string(), Theme::text()),
            Span::styled("_", Theme::key_hint()),
        ])
    } else {
        Line::from(Span::styled(query.to_string(), Theme::text()))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
