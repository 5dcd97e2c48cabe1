// src/cli/mod.rs — CLI definition (clap derive)

pub mod export;
pub mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::state::DashboardState;
use crate::infra::config::Config;
use crate::source::RecordSource;

#[derive(Parser)]
#[command(
    name = "honeydash",
    about = "Terminal dashboard for scam-honeypot session intelligence",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Honeypot server base URL (overrides config and HONEYDASH_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Dashboard API key sent as x-api-key (overrides config and HONEYDASH_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Maximum number of sessions to fetch
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// Read records from a JSON snapshot instead of the server
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Flags win over environment and file values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(key) = &self.api_key {
            config.api.api_key = Some(key.clone());
        }
        if let Some(limit) = self.limit {
            config.api.limit = limit;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI dashboard (default)
    Dashboard,
    /// Print session, scam and message totals
    Stats,
    /// List sessions matching a query
    List {
        /// Free-text filter over every field of a session
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show one session's intelligence and transcript
    Show {
        /// Session to show; falls back to the first match when absent or hidden
        id: Option<String>,
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Export sessions matching a query
    Export {
        #[arg(short, long, default_value = "")]
        query: String,
        /// Output format (json, yaml)
        #[arg(long, default_value = "json")]
        format: String,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Fetch once and wrap the result in a ready state.
pub async fn load_state(source: &dyn RecordSource, limit: u32) -> anyhow::Result<DashboardState> {
    tracing::debug!(origin = %source.describe(), limit, "loading records");
    let records = source.fetch_records(limit).await?;
    Ok(DashboardState::with_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::SessionRecord;
    use crate::infra::errors::SourceError;
    use crate::source::MockRecordSource;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["honeydash"]);
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "honeydash",
            "list",
            "--query",
            "okaxis",
            "--limit",
            "20",
            "--base-url",
            "http://h:1",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                query: "okaxis".into()
            })
        );
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.limit, 20);
        assert_eq!(config.api.base_url, "http://h:1");
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_show_takes_optional_id() {
        let cli = Cli::parse_from(["honeydash", "show", "telegram:7"]);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                id: Some("telegram:7".into()),
                query: String::new()
            })
        );
    }

    #[tokio::test]
    async fn test_load_state_passes_limit() {
        let mut source = MockRecordSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch_records()
            .withf(|limit| *limit == 42)
            .times(1)
            .returning(|_| Ok(vec![SessionRecord::new("a"), SessionRecord::new("b")]));

        let state = load_state(&source, 42).await.unwrap();
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.stats().total_sessions, 2);
    }

    #[tokio::test]
    async fn test_load_state_surfaces_error() {
        let mut source = MockRecordSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch_records()
            .returning(|_| Err(SourceError::Status(401)));

        let err = load_state(&source, 100).await.unwrap_err();
        assert_eq!(err.to_string(), "API error 401");
    }
}
