// src/cli/report.rs — Plain-text views for `stats`, `list` and `show`.

use crate::core::record::{IntelKind, SessionRecord};
use crate::core::state::DashboardState;
use crate::core::stats::SessionStats;
use crate::util::{format_message_time, format_record_time, truncate_str};

pub fn run_stats(state: &DashboardState) {
    print!("{}", stats_text(&state.stats()));
}

pub fn run_list(state: &mut DashboardState, query: &str) {
    state.set_query(query);
    print!("{}", list_text(&state.filtered(), state.records().len()));
}

/// Resolve `id` under `query` the same way the dashboard does and print it.
pub fn run_show(state: &mut DashboardState, id: Option<&str>, query: &str) {
    state.set_query(query);
    if let Some(id) = id {
        state.select(id);
    }

    match state.selected() {
        Some(record) => {
            if id.is_some_and(|id| id != record.session_id) {
                eprintln!(
                    "Session '{}' is not in the current view; showing '{}'.",
                    id.unwrap_or_default(),
                    record.session_id
                );
            }
            print!("{}", detail_text(record));
        }
        None => println!("No sessions to display."),
    }
}

pub fn stats_text(stats: &SessionStats) -> String {
    format!(
        "Total Sessions:  {}\nScams Detected:  {}\nTotal Messages:  {}\n",
        stats.total_sessions, stats.total_scams, stats.total_messages
    )
}

pub fn list_text(sessions: &[&SessionRecord], total: usize) -> String {
    if sessions.is_empty() {
        return "No sessions to display.\n".to_string();
    }

    let width = sessions
        .iter()
        .map(|r| r.session_id.len())
        .max()
        .unwrap_or(0)
        .min(48);
    let mut lines: Vec<String> = sessions
        .iter()
        .map(|r| {
            format!(
                "{:<width$}  {:<5}  Updated {}",
                truncate_str(&r.session_id, width),
                badge(r),
                format_record_time(r.updated_at.as_ref()),
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!("{} of {} sessions", sessions.len(), total));
    finish(lines)
}

pub fn detail_text(record: &SessionRecord) -> String {
    let mut lines = vec![
        format!("{} [{}]", record.session_id, badge(record)),
        format!(
            "Created {} | Updated {}",
            format_record_time(record.created_at.as_ref()),
            format_record_time(record.updated_at.as_ref()),
        ),
        format!("{} messages", record.message_count()),
    ];
    if let Some(notes) = record.agent_notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("Notes: {notes}"));
    }

    for kind in IntelKind::ALL {
        lines.push(String::new());
        lines.push(kind.label().to_string());
        let items = record.intel(kind);
        if items.is_empty() {
            lines.push("  No entries".to_string());
        }
        lines.extend(items.iter().map(|item| format!("  - {item}")));
    }

    lines.push(String::new());
    lines.push("Raw Messages".to_string());
    lines.extend(record.messages().iter().map(|m| {
        format!("  [{}] {}: {}", format_message_time(m), m.sender, m.text)
    }));
    finish(lines)
}

fn badge(record: &SessionRecord) -> &'static str {
    if record.scam_detected {
        "Scam"
    } else {
        "Clean"
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{ExtractedIntelligence, RawMessage};
    use pretty_assertions::assert_eq;

    fn scam_record() -> SessionRecord {
        let mut r = SessionRecord::new("telegram:99");
        r.scam_detected = true;
        r.total_messages_exchanged = Some(2);
        r.agent_notes = Some("Signals observed: urgency.".into());
        r.extracted_intelligence = Some(ExtractedIntelligence {
            upi_ids: Some(vec!["pay@ybl".into()]),
            ..Default::default()
        });
        r.raw_messages = Some(vec![RawMessage {
            sender: "scammer".into(),
            timestamp: None,
            text: "send otp".into(),
            extra: Default::default(),
        }]);
        r
    }

    #[test]
    fn test_stats_text() {
        let stats = SessionStats {
            total_sessions: 2,
            total_scams: 1,
            total_messages: 8,
        };
        assert_eq!(
            stats_text(&stats),
            "Total Sessions:  2\nScams Detected:  1\nTotal Messages:  8\n"
        );
    }

    #[test]
    fn test_list_text_rows_and_footer() {
        let a = scam_record();
        let b = SessionRecord::new("b");
        let text = list_text(&[&a, &b], 5);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("telegram:99  Scam "));
        assert!(lines[1].starts_with("b            Clean"));
        assert!(lines[1].ends_with("Updated -"));
        assert_eq!(lines.last().copied(), Some("2 of 5 sessions"));
    }

    #[test]
    fn test_list_text_empty() {
        assert_eq!(list_text(&[], 3), "No sessions to display.\n");
    }

    #[test]
    fn test_detail_text_sections() {
        let text = detail_text(&scam_record());
        assert!(text.starts_with("telegram:99 [Scam]\n"));
        assert!(text.contains("Created - | Updated -"));
        assert!(text.contains("2 messages"));
        assert!(text.contains("Notes: Signals observed: urgency."));
        assert!(text.contains("UPI IDs\n  - pay@ybl\n"));
        assert!(text.contains("Bank Accounts\n  No entries\n"));
        assert!(text.contains("  [-] scammer: send otp"));
    }

    #[test]
    fn test_detail_text_bare_record_layout() {
        let text = detail_text(&SessionRecord::new("bare"));
        assert_eq!(
            text,
            "bare [Clean]\n\
             Created - | Updated -\n\
             0 messages\n\
             \n\
             UPI IDs\n  No entries\n\
             \n\
             Bank Accounts\n  No entries\n\
             \n\
             Phone Numbers\n  No entries\n\
             \n\
             Phishing Links\n  No entries\n\
             \n\
             Keywords\n  No entries\n\
             \n\
             Raw Messages\n"
        );
    }
}
