//! # Export
//!
//! Serializes universities into a JSON document and writes it to disk.
//!
//! ```text
//! {
//!   "exportTimestamp": "2026-10-19T08:30:00Z",
//!   "universities": [ { name, city, faculties: [ { name, departments: [...] } ] } ],
//!   "statistics": { totalUniversities, totalFaculties, totalDepartments }
//! }
//! ```
//!
//! Timestamps are UTC with second precision. Files are written to a `.tmp`
//! sibling first and renamed into place, so a failed write never leaves a
//! partial document under the final name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SubsecRound, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{University, UniversityRecord};
use crate::core::stats::compute_statistics;

/// Prefix of every export file name.
pub const EXPORT_FILE_PREFIX: &str = "kosovo_universities_data";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode export document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write export to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_timestamp: DateTime<Utc>,
    pub universities: Vec<UniversityRecord>,
    pub statistics: ExportStatistics,
}

/// The narrower summary carried by an export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportStatistics {
    pub total_universities: usize,
    pub total_faculties: usize,
    pub total_departments: usize,
}

impl ExportDocument {
    pub fn to_json(&self) -> Result<String, ExportError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builds the export document for `universities` (the full catalog or any
/// working set), stamped with `timestamp`.
pub fn export_catalog<'a, I>(universities: I, timestamp: DateTime<Utc>) -> ExportDocument
where
    I: IntoIterator<Item = &'a University>,
{
    let universities: Vec<&University> = universities.into_iter().collect();
    let report = compute_statistics(universities.iter().copied());
    ExportDocument {
        export_timestamp: timestamp.trunc_subsecs(0),
        universities: universities.iter().map(|u| u.to_record()).collect(),
        statistics: ExportStatistics {
            total_universities: report.total_universities,
            total_faculties: report.total_faculties,
            total_departments: report.total_departments,
        },
    }
}

/// `kosovo_universities_data_YYYYmmdd_HHMMSS.json`
pub fn export_file_name(timestamp: DateTime<Utc>) -> String {
    format!(
        "{}_{}.json",
        EXPORT_FILE_PREFIX,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Writes `document` to `path` via a temporary sibling and a rename.
pub fn write_export(document: &ExportDocument, path: &Path) -> Result<(), ExportError> {
    let json = document.to_json()?;
    let tmp_path = path.with_extension("tmp");
    let io_error = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = fs::write(&tmp_path, json) {
        discard_tmp(&tmp_path);
        return Err(io_error(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        discard_tmp(&tmp_path);
        return Err(io_error(e));
    }
    debug!("Export written to {}", path.display());
    Ok(())
}

fn discard_tmp(tmp_path: &Path) {
    if tmp_path.exists() {
        if let Err(e) = fs::remove_file(tmp_path) {
            warn!("Failed to remove {}: {}", tmp_path.display(), e);
        }
    }
}

/// Exports `universities` into `dir` under a timestamped file name and
/// returns the path written.
pub fn export_to_dir<'a, I>(universities: I, dir: &Path) -> Result<PathBuf, ExportError>
where
    I: IntoIterator<Item = &'a University>,
{
    let now = Utc::now();
    let document = export_catalog(universities, now);
    let path = dir.join(export_file_name(now));
    write_export(&document, &path)?;
    info!(
        "Exported {} universities to {}",
        document.statistics.total_universities,
        path.display()
    );
    Ok(path)
}

/// Reads an export document back from disk.
pub fn read_export(path: &Path) -> Result<ExportDocument, ExportError> {
    let json = fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ExportDocument::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{City, initialize_data};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 5).unwrap()
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(fixed_time()),
            "kosovo_universities_data_20261019_083005.json"
        );
    }

    #[test]
    fn test_export_document_schema() {
        let catalog = initialize_data();
        let doc = export_catalog(catalog.universities(), fixed_time());
        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(json["exportTimestamp"], "2026-10-19T08:30:05Z");
        assert_eq!(json["universities"].as_array().unwrap().len(), 7);
        assert_eq!(json["universities"][0]["city"], "Prishtina");
        assert_eq!(json["statistics"]["totalUniversities"], 7);
        assert_eq!(json["statistics"]["totalFaculties"], 32);
        assert!(json["statistics"].get("totalSubjects").is_none());
        assert!(json.get("perCity").is_none());
    }

    #[test]
    fn test_export_truncates_subseconds() {
        let catalog = initialize_data();
        let stamped = fixed_time() + chrono::Duration::milliseconds(750);
        let doc = export_catalog(catalog.universities(), stamped);
        assert_eq!(doc.export_timestamp, fixed_time());
    }

    #[test]
    fn test_export_is_indented_and_escapes_quotes() {
        let catalog = initialize_data();
        let doc = export_catalog(catalog.universities(), fixed_time());
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"University of Prishtina \\\"Hasan Prishtina\\\"\""));
        assert!(json.starts_with("{\n  \"exportTimestamp\""));
    }

    #[test]
    fn test_export_subset_statistics_match_subset() {
        let catalog = initialize_data();
        let subset = catalog
            .universities()
            .iter()
            .filter(|u| u.city() == City::Peja);
        let doc = export_catalog(subset, fixed_time());
        assert_eq!(doc.universities.len(), 1);
        assert_eq!(doc.statistics.total_universities, 1);
        assert_eq!(doc.statistics.total_faculties, 3);
        assert_eq!(doc.statistics.total_departments, 3 + 2 + 5);
    }

    #[test]
    fn test_document_json_round_trip() {
        let catalog = initialize_data();
        let doc = export_catalog(catalog.universities(), fixed_time());
        let parsed = ExportDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ExportDocument::from_json("not json").unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }

    #[test]
    fn test_write_export_to_missing_directory_fails_with_path() {
        let catalog = initialize_data();
        let doc = export_catalog(catalog.universities(), fixed_time());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_export(&doc, &path).unwrap_err();
        match err {
            ExportError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(!path.with_extension("tmp").exists());
    }
}
