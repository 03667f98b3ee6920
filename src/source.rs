//! Data source abstraction.
//!
//! The pipeline needs exactly one operation from its source: fetch all
//! records, succeeding with an ordered sequence or failing. The trait keeps
//! the core testable with stub sources; the production implementation reads
//! a JSON array file.

use crate::error::{Result, RltabError};
use crate::record::Record;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// One-shot provider of the full dataset.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every record, in source order. A failure here puts the viewer
    /// into its error-display state; it is not retried.
    async fn fetch_records(&self) -> Result<Vec<Record>>;

    /// Human-readable origin of the data, for the status line.
    fn describe(&self) -> String;
}

/// Dataset source backed by a JSON file holding an array of records.
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Validate the path eagerly so obvious mistakes surface before the
    /// terminal is put into raw mode.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(RltabError::FileNotFound { path });
        }
        if !path.is_file() {
            return Err(RltabError::NotAFile { path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn fetch_records(&self) -> Result<Vec<Record>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RltabError::source_error("could not read dataset file", e))?;
        let records: Vec<Record> = serde_json::from_slice(&bytes)?;
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write dataset");
        file
    }

    #[tokio::test]
    async fn test_fetch_records_from_json_array() {
        let file = write_dataset(
            r#"[
                {"group_name": "Beverages", "code": "BV-001", "name": "Green Tea"},
                {"group_name": "Snacks", "code": "SN-001", "name": "Peanuts"}
            ]"#,
        );
        let source = JsonFileSource::new(file.path()).unwrap();
        let records = source.fetch_records().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Green Tea"));
        assert_eq!(records[1].group_name.as_deref(), Some("Snacks"));
    }

    #[tokio::test]
    async fn test_fetch_preserves_source_order() {
        let file = write_dataset(r#"[{"code": "b"}, {"code": "a"}, {"code": "c"}]"#);
        let source = JsonFileSource::new(file.path()).unwrap();
        let records = source.fetch_records().await.unwrap();
        let codes: Vec<_> = records.iter().map(|r| r.code.as_deref().unwrap()).collect();
        assert_eq!(codes, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let file = write_dataset("not json at all");
        let source = JsonFileSource::new(file.path()).unwrap();
        let err = source.fetch_records().await.unwrap_err();
        assert!(matches!(err, RltabError::DecodeError(_)));
    }

    #[test]
    fn test_missing_path_rejected_eagerly() {
        let err = JsonFileSource::new("/no/such/file.json").unwrap_err();
        assert!(matches!(err, RltabError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileSource::new(dir.path()).unwrap_err();
        assert!(matches!(err, RltabError::NotAFile { .. }));
    }

    #[test]
    fn test_describe_uses_file_name() {
        let file = write_dataset("[]");
        let source = JsonFileSource::new(file.path()).unwrap();
        assert_eq!(
            source.describe(),
            file.path().file_name().unwrap().to_str().unwrap()
        );
    }
}
