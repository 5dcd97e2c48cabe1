// src/infra/config.rs — Configuration loading (TOML + environment)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::infra::errors::HoneydashError;
use crate::infra::paths;

/// Number of records requested per fetch unless configured otherwise.
pub const DEFAULT_LIMIT: u32 = 100;

pub const ENV_BASE_URL: &str = "HONEYDASH_API_BASE_URL";
pub const ENV_API_KEY: &str = "HONEYDASH_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the honeypot server; `/dashboard/records` is appended.
    pub base_url: String,
    /// Sent as the `x-api-key` header.
    pub api_key: Option<String>,
    pub limit: u32,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            api_key: None,
            limit: DEFAULT_LIMIT,
            timeout_seconds: 30,
        }
    }
}

impl ApiConfig {
    /// `{base_url}/dashboard/records`, ignoring a trailing slash on the base.
    pub fn records_endpoint(&self) -> Result<Url, HoneydashError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(HoneydashError::Config("api.base_url is not set".into()));
        }
        Url::parse(&format!("{base}/dashboard/records"))
            .map_err(|e| HoneydashError::Config(format!("invalid api.base_url '{base}': {e}")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Dashboard log file; defaults to the data dir.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: None,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply HONEYDASH_API_BASE_URL / HONEYDASH_API_KEY over the file values.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api.api_key = Some(key);
        }
    }
}
