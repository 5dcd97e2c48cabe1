// src/source/file.rs — Records from a local `{"records": [...]}` snapshot,
// e.g. one written by `honeydash export`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{decode_records, RecordSource};
use crate::core::record::SessionRecord;
use crate::infra::errors::SourceError;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn fetch_records(&self, limit: u32) -> Result<Vec<SessionRecord>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        let mut records = decode_records(value);
        records.truncate(limit as usize);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
