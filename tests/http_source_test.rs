// tests/http_source_test.rs — Integration test: HttpSource against a fake
// dashboard server (axum on an ephemeral port).

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use honeydash::infra::config::ApiConfig;
use honeydash::infra::errors::SourceError;
use honeydash::source::{HttpSource, RecordSource};

const KEY: &str = "test-dashboard-key";

async fn records_handler(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if headers.get("x-api-key").and_then(|v| v.to_str().ok()) != Some(KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid API key"})));
    }

    match params.get("limit").map(String::as_str) {
        Some("0") => (StatusCode::OK, Json(json!({}))),
        Some("1") => (
            StatusCode::OK,
            Json(json!({"records": [
                {"sessionId": "telegram:1", "scamDetected": true, "totalMessagesExchanged": 4},
                {"scamDetected": "not a record"},
            ]})),
        ),
        Some(limit) => {
            let notes = format!("limit was {limit}");
            (
                StatusCode::OK,
                Json(json!({"records": [
                    {
                        "sessionId": "telegram:1",
                        "createdAt": 1717000000000u64,
                        "updatedAt": "2024-05-29T16:26:40Z",
                        "scamDetected": true,
                        "totalMessagesExchanged": 4,
                        "extractedIntelligence": {"upiIds": ["fraud@okaxis"], "bankAccounts": []},
                        "agentNotes": notes,
                        "rawMessages": [{"sender": "scammer", "timestamp": 1717000000u64, "text": "pay now"}],
                        "channel": "telegram"
                    },
                    {"sessionId": "whatsapp:2"}
                ]})),
            )
        }
        None => (StatusCode::BAD_REQUEST, Json(json!({"detail": "limit required"}))),
    }
}

/// Start the fake server and return its base URL.
async fn spawn_server() -> String {
    let app = Router::new().route("/dashboard/records", get(records_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn source(base_url: &str, api_key: Option<&str>) -> HttpSource {
    let config = ApiConfig {
        base_url: format!("{base_url}/"),
        api_key: api_key.map(String::from),
        ..Default::default()
    };
    HttpSource::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_key_and_limit() {
    let base = spawn_server().await;
    let records = source(&base, Some(KEY)).fetch_records(100).await.unwrap();

    assert_eq!(records.len(), 2);
    let first = &records[0];
    assert_eq!(first.session_id, "telegram:1");
    assert!(first.scam_detected);
    assert_eq!(first.message_count(), 4);
    assert_eq!(first.agent_notes.as_deref(), Some("limit was 100"));
    assert_eq!(first.messages().len(), 1);
    assert!(first.extra.contains_key("channel"));

    let second = &records[1];
    assert!(!second.scam_detected);
    assert_eq!(second.message_count(), 0);
    assert!(second.messages().is_empty());
}

#[tokio::test]
async fn test_wrong_key_is_status_error() {
    let base = spawn_server().await;
    let err = source(&base, Some("nope")).fetch_records(100).await.unwrap_err();

    assert!(matches!(err, SourceError::Status(401)));
    assert_eq!(err.to_string(), "API error 401");
}

#[tokio::test]
async fn test_missing_key_is_status_error() {
    let base = spawn_server().await;
    let err = source(&base, None).fetch_records(100).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_missing_records_field_is_empty() {
    let base = spawn_server().await;
    let records = source(&base, Some(KEY)).fetch_records(0).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_malformed_record_is_skipped() {
    let base = spawn_server().await;
    let records = source(&base, Some(KEY)).fetch_records(1).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].session_id, "telegram:1");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(&format!("http://{addr}"), Some(KEY))
        .fetch_records(10)
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Transport(_)));
    assert_eq!(err.status(), None);
}
