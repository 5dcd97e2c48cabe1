// src/tui/widgets/sessions.rs — Filtered session list.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::core::record::SessionRecord;
use crate::tui::theme::Theme;
use crate::util::{format_record_time, truncate_str};

pub fn render(
    f: &mut Frame,
    area: Rect,
    sessions: &[&SessionRecord],
    total: usize,
    state: &mut ListState,
    focused: bool,
) {
    let title = if sessions.len() == total {
        format!(" Sessions ({total}) ")
    } else {
        format!(" Sessions ({} of {total}) ", sessions.len())
    };

    let id_width = area.width.saturating_sub(12) as usize;
    let items: Vec<ListItem> = sessions
        .iter()
        .map(|r| {
            let badge = if r.scam_detected { "Scam" } else { "Clean" };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(truncate_str(&r.session_id, id_width).to_string(), Theme::text()),
                    Span::raw("  "),
                    Span::styled(badge, Theme::badge(r.scam_detected)),
                ]),
                Line::from(Span::styled(
                    format!("Updated {}", format_record_time(r.updated_at.as_ref())),
                    Theme::text_dim(),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(if focused {
                    Theme::border_focus()
                } else {
                    Theme::border()
                }),
        )
        .highlight_style(Theme::selected())
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}
