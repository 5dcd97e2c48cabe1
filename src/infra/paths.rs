// src/infra/paths.rs — Config and data locations
//
// HONEYDASH_HOME, when set, holds everything: config.toml at its root and
// the log under data/. Otherwise config lives in ~/.honeydash/ and data in
// the platform data dir (XDG_DATA_HOME/honeydash on Linux).

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;
use std::sync::OnceLock;

static PROJECT_DIRS: OnceLock<Option<ProjectDirs>> = OnceLock::new();

fn project_dirs() -> Option<&'static ProjectDirs> {
    PROJECT_DIRS
        .get_or_init(|| ProjectDirs::from("", "", "honeydash"))
        .as_ref()
}

fn honeydash_home() -> Option<PathBuf> {
    std::env::var_os("HONEYDASH_HOME").map(PathBuf::from)
}

/// Home directory, or the working directory when none can be determined.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// $HONEYDASH_HOME/ or ~/.honeydash/
pub fn config_dir() -> PathBuf {
    if let Some(home) = honeydash_home() {
        return home;
    }
    dirs_home().join(".honeydash")
}

/// $HONEYDASH_HOME/data/ or the platform data dir.
pub fn data_dir() -> PathBuf {
    if let Some(home) = honeydash_home() {
        return home.join("data");
    }
    match project_dirs() {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Where the dashboard writes its log while it owns the terminal.
pub fn log_file_path() -> PathBuf {
    data_dir().join("honeydash.log")
}

pub async fn ensure_dirs() -> anyhow::Result<()> {
    for dir in [config_dir(), data_dir()] {
        tokio::fs::create_dir_all(&dir).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_inside_config_dir() {
        assert_eq!(config_file_path().parent(), Some(config_dir().as_path()));
        assert!(config_file_path().ends_with("config.toml"));
    }

    #[test]
    fn test_log_file_inside_data_dir() {
        assert_eq!(log_file_path().parent(), Some(data_dir().as_path()));
    }
}
