// src/infra/errors.rs — Error types for honeydash

use thiserror::Error;

/// Failure to obtain a record collection from a data source.
///
/// The `Display` form is what the dashboard shows in its error banner.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("API error {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Cannot read snapshot '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl SourceError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum HoneydashError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported format '{0}'. Options: json, yaml")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_banner() {
        let err = SourceError::Status(401);
        assert_eq!(err.to_string(), "API error 401");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_source_error_is_transparent() {
        let err: HoneydashError = SourceError::Status(500).into();
        assert_eq!(err.to_string(), "API error 500");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = SourceError::Io {
            path: "/tmp/missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
        assert_eq!(err.status(), None);
    }
}
