// src/util.rs — Shared utility functions

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::core::record::{RawMessage, RecordTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Truncate a string for display/logging (UTF-8 safe).
///
/// Returns a substring of at most `max_len` bytes, ensuring the cut
/// point falls on a valid UTF-8 character boundary.
pub fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}

/// Local-time rendering of a record timestamp.
///
/// Missing or empty values render as `-`; strings that are not recognizable
/// dates are shown unchanged.
pub fn format_record_time(value: Option<&RecordTime>) -> String {
    match value {
        None => "-".to_string(),
        Some(RecordTime::Epoch(_)) => value
            .and_then(RecordTime::as_millis)
            .map(format_epoch_millis)
            .unwrap_or_else(|| "-".to_string()),
        Some(RecordTime::Text(text)) => format_time_text(text),
    }
}

/// Message timestamps are epoch seconds.
pub fn format_message_time(message: &RawMessage) -> String {
    message
        .timestamp_millis()
        .map(format_epoch_millis)
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_epoch_millis(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => millis.to_string(),
    }
}

fn format_time_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    parse_time_text(trimmed)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| text.to_string())
}

/// RFC 3339 with an offset, naive date-times as local time, bare dates as
/// UTC midnight.
fn parse_time_text(text: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(&Local))
}
