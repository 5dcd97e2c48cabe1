// src/core/record.rs — Session records as served by the honeypot's /dashboard/records
//
// Field names follow the server's camelCase JSON. Optional fields stay optional
// so a record round-trips without gaining keys it never had, and unknown fields
// are kept in `extra` so full-text search sees everything the server sent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// A timestamp as the server sends it: an ISO-8601 string or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordTime {
    Epoch(Number),
    Text(String),
}

impl RecordTime {
    /// Epoch milliseconds, when the value is numeric.
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            RecordTime::Epoch(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            RecordTime::Text(_) => None,
        }
    }
}

/// One tracked honeypot conversation and what was extracted from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<RecordTime>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<RecordTime>,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub scam_detected: bool,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_messages_exchanged: Option<u64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub extracted_intelligence: Option<ExtractedIntelligence>,

    /// Server-side summary of the signals observed in the conversation.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub agent_notes: Option<String>,

    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub raw_messages: Option<Vec<RawMessage>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    /// A record with only an id; everything else absent.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            created_at: None,
            updated_at: None,
            scam_detected: false,
            total_messages_exchanged: None,
            extracted_intelligence: None,
            agent_notes: None,
            raw_messages: None,
            extra: Map::new(),
        }
    }

    /// Message count, absent counts as zero.
    pub fn message_count(&self) -> u64 {
        self.total_messages_exchanged.unwrap_or(0)
    }

    pub fn messages(&self) -> &[RawMessage] {
        self.raw_messages.as_deref().unwrap_or_default()
    }

    /// Entries of one intelligence list; absent lists are empty.
    pub fn intel(&self, kind: IntelKind) -> &[String] {
        self.extracted_intelligence
            .as_ref()
            .map(|i| i.list(kind))
            .unwrap_or_default()
    }

    /// Compact JSON of the whole record, the text full-text search runs over.
    ///
    /// Declared fields come first in declaration order, then unknown fields
    /// in key order, so the result is stable for a given record.
    pub fn search_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.session_id.clone())
    }
}

/// Structured signals pulled out of the conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedIntelligence {
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub upi_ids: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub bank_accounts: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub phishing_links: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub suspicious_keywords: Option<Vec<String>>,

    /// Lists the dashboard does not display (emailAddresses, suspiciousDomains, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExtractedIntelligence {
    pub fn list(&self, kind: IntelKind) -> &[String] {
        let list = match kind {
            IntelKind::UpiIds => &self.upi_ids,
            IntelKind::BankAccounts => &self.bank_accounts,
            IntelKind::PhoneNumbers => &self.phone_numbers,
            IntelKind::PhishingLinks => &self.phishing_links,
            IntelKind::SuspiciousKeywords => &self.suspicious_keywords,
        };
        list.as_deref().unwrap_or_default()
    }
}

/// The intelligence lists shown in the detail view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntelKind {
    UpiIds,
    BankAccounts,
    PhoneNumbers,
    PhishingLinks,
    SuspiciousKeywords,
}

impl IntelKind {
    pub const ALL: [IntelKind; 5] = [
        IntelKind::UpiIds,
        IntelKind::BankAccounts,
        IntelKind::PhoneNumbers,
        IntelKind::PhishingLinks,
        IntelKind::SuspiciousKeywords,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IntelKind::UpiIds => "UPI IDs",
            IntelKind::BankAccounts => "Bank Accounts",
            IntelKind::PhoneNumbers => "Phone Numbers",
            IntelKind::PhishingLinks => "Phishing Links",
            IntelKind::SuspiciousKeywords => "Keywords",
        }
    }
}

/// One message of the transcript. `timestamp` is epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub sender: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Number>,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub text: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawMessage {
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp
            .as_ref()
            .and_then(Number::as_f64)
            .map(|secs| (secs * 1000.0) as i64)
    }
}

// ── Lenient field decoding ───────────────────────────────────
//
// A null or wrongly-typed value in an optional field reads as absent
// instead of rejecting the whole record.

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Keeps the elements that decode, drops the rest. A non-array reads as absent.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}
