// src/tui/widgets/detail.rs — Detail pane for the resolved session.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::record::{IntelKind, SessionRecord};
use crate::tui::theme::Theme;
use crate::util::{format_message_time, format_record_time};

pub fn render(f: &mut Frame, area: Rect, record: Option<&SessionRecord>, scroll: u16) {
    let block = Block::default()
        .title(" Session ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let Some(record) = record else {
        let p = Paragraph::new(Line::from(Span::styled(
            "No sessions to display.",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    };

    let p = Paragraph::new(detail_lines(record))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(p, area);
}

fn detail_lines(record: &SessionRecord) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(record.session_id.as_str(), Theme::header()),
            Span::raw("  "),
            Span::styled(
                if record.scam_detected { "Scam" } else { "Clean" },
                Theme::badge(record.scam_detected),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Created {} | Updated {}",
                format_record_time(record.created_at.as_ref()),
                format_record_time(record.updated_at.as_ref()),
            ),
            Theme::text_dim(),
        )),
        Line::from(Span::styled(
            format!("{} messages", record.message_count()),
            Theme::info(),
        )),
    ];

    if let Some(notes) = record.agent_notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Notes: ", Theme::text_dim()),
            Span::styled(notes, Theme::text()),
        ]));
    }

    for kind in IntelKind::ALL {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(kind.label(), Theme::section())));
        let items = record.intel(kind);
        if items.is_empty() {
            lines.push(Line::from(Span::styled("  No entries", Theme::text_dim())));
        } else {
            lines.extend(
                items
                    .iter()
                    .map(|item| Line::from(Span::styled(format!("  \u{2022} {item}"), Theme::text()))),
            );
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Raw Messages", Theme::section())));
    if record.messages().is_empty() {
        lines.push(Line::from(Span::styled("  No messages", Theme::text_dim())));
    }
    for message in record.messages() {
        lines.push(Line::from(vec![
            Span::styled(message.sender.as_str(), Theme::sender()),
            Span::raw("  "),
            Span::styled(format_message_time(message), Theme::text_dim()),
        ]));
        lines.push(Line::from(Span::styled(message.text.as_str(), Theme::text())));
    }

    lines
}
