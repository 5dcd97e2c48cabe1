// src/source/mod.rs — Where session records come from.
//
// The dashboard only ever asks a source for "up to N records". A fetch
// either yields a whole new collection or fails; nothing partial.

pub mod file;
pub mod http;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::core::record::SessionRecord;
use crate::infra::config::Config;
use crate::infra::errors::{HoneydashError, SourceError};

pub use file::FileSource;
pub use http::HttpSource;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch at most `limit` records, in the order the source holds them.
    async fn fetch_records(&self, limit: u32) -> Result<Vec<SessionRecord>, SourceError>;

    /// Human-readable origin, for logs and the dashboard header.
    fn describe(&self) -> String;
}

/// Body shape shared by the server response and exported snapshots.
#[derive(Debug, Serialize)]
pub struct RecordsEnvelope<'a> {
    pub records: Vec<&'a SessionRecord>,
}

/// Pull the records out of a `{"records": [...]}` body.
///
/// A missing or non-array `records` yields an empty collection. Elements
/// that do not decode as records are skipped with a warning.
pub fn decode_records(body: Value) -> Vec<SessionRecord> {
    let items = match body {
        Value::Object(mut map) => match map.remove("records") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<SessionRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping malformed session record");
                None
            }
        })
        .collect()
}

/// The snapshot file when one is given, the configured server otherwise.
pub fn from_config(
    config: &Config,
    snapshot: Option<&Path>,
) -> Result<Arc<dyn RecordSource>, HoneydashError> {
    match snapshot {
        Some(path) => Ok(Arc::new(FileSource::new(path))),
        None => Ok(Arc::new(HttpSource::new(&config.api)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::IntelKind;
    use crate::core::stats::SessionStats;
    use serde_json::json;

    #[test]
    fn test_decode_records_envelope() {
        let body = json!({
            "records": [
                {"sessionId": "a", "scamDetected": true, "totalMessagesExchanged": 5},
                {"sessionId": "b"}
            ]
        });
        let records = decode_records(body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].session_id, "a");
        assert!(records[0].scam_detected);
    }

    #[test]
    fn test_decode_missing_records_is_empty() {
        assert!(decode_records(json!({})).is_empty());
        assert!(decode_records(json!({"records": {"sessionId": "a"}})).is_empty());
        assert!(decode_records(json!([{"sessionId": "a"}])).is_empty());
        assert!(decode_records(Value::Null).is_empty());
    }

    #[test]
    fn test_decode_skips_malformed_elements() {
        let body = json!({
            "records": [
                {"sessionId": "ok"},
                {"scamDetected": true},
                "not a record",
                {"sessionId": "also-ok", "totalMessagesExchanged": 2}
            ]
        });
        let ids: Vec<String> = decode_records(body)
            .into_iter()
            .map(|r| r.session_id)
            .collect();
        assert_eq!(ids, vec!["ok", "also-ok"]);
    }

    #[test]
    fn test_decode_keeps_records_with_null_fields() {
        let body = json!({
            "records": [
                {"sessionId": "ok", "scamDetected": true, "totalMessagesExchanged": 2},
                {"sessionId": "null-flag", "scamDetected": null, "totalMessagesExchanged": 3},
                {
                    "sessionId": "null-text",
                    "scamDetected": true,
                    "totalMessagesExchanged": 4,
                    "rawMessages": [{"sender": "scammer", "timestamp": 1767607200, "text": null}]
                },
                {
                    "sessionId": "null-upi",
                    "scamDetected": true,
                    "totalMessagesExchanged": 5,
                    "extractedIntelligence": {"upiIds": [null, "x@ybl"]}
                },
                {
                    "sessionId": "text-timestamp",
                    "totalMessagesExchanged": 1,
                    "rawMessages": [{"sender": "user", "timestamp": "yesterday", "text": "hello"}]
                }
            ]
        });
        let records = decode_records(body);
        let ids: Vec<&str> = records.iter().map(|r| r.session_id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "null-flag", "null-text", "null-upi", "text-timestamp"]);

        let stats = SessionStats::compute(&records);
        assert_eq!(stats.total_sessions, 5);
        assert_eq!(stats.total_scams, 3);
        assert_eq!(stats.total_messages, 15);

        assert_eq!(records[2].messages()[0].text, "");
        assert_eq!(records[3].intel(IntelKind::UpiIds), ["x@ybl".to_string()]);
        assert_eq!(records[4].messages()[0].timestamp, None);
        assert_eq!(records[4].messages()[0].text, "hello");
    }

    #[test]
    fn test_envelope_serializes_like_server_body() {
        let a = SessionRecord::new("a");
        let envelope = RecordsEnvelope { records: vec![&a] };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(decode_records(value), vec![a]);
    }

    #[test]
    fn test_from_config_prefers_snapshot() {
        let config = Config::default();
        let source = from_config(&config, Some(Path::new("/tmp/snapshot.json"))).unwrap();
        assert!(source.describe().contains("/tmp/snapshot.json"));

        let source = from_config(&config, None).unwrap();
        assert!(source.describe().contains("localhost:8080"));
    }
}
