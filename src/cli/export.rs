// src/cli/export.rs — Snapshot export command
//
// Writes the sessions matching a query as `{"records": [...]}` in JSON or
// YAML. A JSON export can be read back with `--file`.

use std::path::Path;

use crate::core::state::DashboardState;
use crate::infra::errors::HoneydashError;
use crate::source::RecordsEnvelope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Result<Self, HoneydashError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(HoneydashError::UnsupportedFormat(s.to_string())),
        }
    }
}

pub fn render_export(
    envelope: &RecordsEnvelope<'_>,
    format: ExportFormat,
) -> Result<String, HoneydashError> {
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(envelope).map_err(anyhow::Error::from)?,
        ExportFormat::Yaml => serde_yml::to_string(envelope).map_err(anyhow::Error::from)?,
    };
    Ok(text)
}

/// Export the filtered view of `state` under `query`.
pub async fn run_export(
    state: &mut DashboardState,
    query: &str,
    format: &str,
    output: Option<&Path>,
) -> Result<(), HoneydashError> {
    let format = ExportFormat::parse(format)?;
    state.set_query(query);

    let envelope = RecordsEnvelope {
        records: state.filtered(),
    };
    let count = envelope.records.len();
    let text = render_export(&envelope, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &text).await?;
            tracing::info!(count, path = %path.display(), "exported sessions");
            println!("Exported {} sessions to {}", count, path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
