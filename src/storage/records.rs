//! Record operations
//!
//! Reads and writes per-user JSON records. Writes go through a temporary
//! file followed by a rename so a crashed write never leaves a half-written
//! record behind.

use chrono::NaiveDate;
use log::{error, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::StorageError;

/// Check whether a record exists at the given path
pub fn record_exists(path: &Path) -> bool {
    path.is_file()
}

/// Read and deserialize a JSON record
pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    if !path.is_file() {
        return Err(StorageError::RecordNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize and write a JSON record atomically
pub fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<(), StorageError> {
    let parent = path
        .parent()
        .ok_or_else(|| StorageError::InvalidPath(path.display().to_string()))?;
    fs::create_dir_all(parent)?;

    let json = serde_json::to_string_pretty(record)?;

    // Write to a temp file first, then rename over the target
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Delete a record
pub fn delete_record(path: &Path) -> Result<(), StorageError> {
    if !path.is_file() {
        return Err(StorageError::RecordNotFound(path.display().to_string()));
    }

    // Delete with retries for permission issues
    let retries = 3;
    for attempt in 1..=retries {
        match fs::remove_file(path) {
            Ok(_) => {
                info!("Deleted record {}", path.display());
                return Ok(());
            }
            Err(e) => {
                if attempt < retries && e.kind() == std::io::ErrorKind::PermissionDenied {
                    thread::sleep(Duration::from_millis(100 * attempt as u64));
                    continue;
                } else {
                    error!("Failed to delete record {}: {}", path.display(), e);
                    return Err(StorageError::from(e));
                }
            }
        }
    }

    Err(StorageError::IoError(std::io::Error::other(
        "Failed to delete record after retries",
    )))
}

/// List the entry dates recorded in an entries directory, oldest first.
///
/// A missing directory means no entries yet, not an error. Files that don't
/// parse as `YYYY-MM-DD.json` are skipped.
pub fn list_entry_dates(entries_dir: &Path) -> Result<Vec<NaiveDate>, StorageError> {
    if !entries_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut dates = Vec::new();
    for entry in fs::read_dir(entries_dir)?.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            && let Ok(date) = NaiveDate::parse_from_str(stem, "%Y-%m-%d")
        {
            dates.push(date);
        }
    }

    dates.sort();
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sample.json");

        let record = Sample {
            name: "check-in".into(),
            count: 3,
        };
        write_record(&path, &record).unwrap();
        assert!(record_exists(&path));

        let loaded: Sample = read_record(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_record::<Sample>(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StorageError::RecordNotFound(_)));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        write_record(
            &path,
            &Sample {
                name: "x".into(),
                count: 1,
            },
        )
        .unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["sample.json".to_string()]);
    }

    #[test]
    fn entry_dates_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["2025-03-02.json", "2025-03-01.json", "notes.txt", "junk.json"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }

        let dates = list_entry_dates(dir.path()).unwrap();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn missing_entries_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dates = list_entry_dates(&dir.path().join("entries")).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn delete_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        write_record(
            &path,
            &Sample {
                name: "x".into(),
                count: 1,
            },
        )
        .unwrap();

        delete_record(&path).unwrap();
        assert!(!record_exists(&path));
        assert!(matches!(
            delete_record(&path),
            Err(StorageError::RecordNotFound(_))
        ));
    }
}
