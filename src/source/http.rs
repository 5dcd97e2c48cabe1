// src/source/http.rs — Records from the honeypot server's /dashboard/records
//
// GET {base_url}/dashboard/records?limit=N with the dashboard key in the
// `x-api-key` header. No retry: a failed refresh is reported and the user
// refreshes again.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{decode_records, RecordSource};
use crate::core::record::SessionRecord;
use crate::infra::config::ApiConfig;
use crate::infra::errors::{HoneydashError, SourceError};

pub const API_KEY_HEADER: &str = "x-api-key";

pub struct HttpSource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl HttpSource {
    pub fn new(config: &ApiConfig) -> Result<Self, HoneydashError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(SourceError::from)?;

        Ok(Self {
            client,
            endpoint: config.records_endpoint()?,
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    fn request_url(&self, limit: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        url
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch_records(&self, limit: u32) -> Result<Vec<SessionRecord>, SourceError> {
        let url = self.request_url(limit);
        tracing::debug!(%url, "fetching session records");

        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "records endpoint returned an error");
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(decode_records(value))
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
