//! Export of the filtered set.
//!
//! Serializes the entire filtered subset (not just the visible page) as a
//! pretty-printed JSON document named with the current date, e.g.
//! `filtered_data_2024-03-15.json`.

use crate::error::{Result, RltabError};
use crate::record::Record;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("filtered_data_{}.json", date.format("%Y-%m-%d"))
}

/// Write `records` to a dated JSON file under `dir`; returns the path written.
pub fn write_filtered(records: &[Record], dir: &Path) -> Result<PathBuf> {
    write_filtered_dated(records, dir, chrono::Local::now().date_naive())
}

/// Same as [`write_filtered`] with an explicit date, for deterministic tests.
pub fn write_filtered_dated(records: &[Record], dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(export_file_name(date));
    let document = serde_json::to_vec_pretty(records)
        .map_err(|e| RltabError::export(format!("could not serialize records: {e}")))?;
    std::fs::write(&path, document)
        .map_err(|e| RltabError::export(format!("could not write {}: {e}", path.display())))?;
    Ok(path)
}
