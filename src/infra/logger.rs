// src/infra/logger.rs — Structured logging with tracing

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr. Used by the one-shot commands.
pub fn init_logging(level: &str) {
    fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

/// Log to an append-only file. Used while the dashboard owns the terminal.
pub fn init_file_logging(level: &str, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
