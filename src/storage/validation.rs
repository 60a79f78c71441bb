//! Storage path validation
//!
//! Builds and validates the on-disk layout for per-user journal stores.
//! User identifiers become directory names, so they are checked here before
//! they ever touch a path.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Characters permitted in a user identifier used as a directory name.
fn is_safe_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@')
}

/// Validate that a user identifier is safe to use as a path component.
pub fn is_safe_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && !user_id.starts_with('.')
        && !user_id.contains("..")
        && user_id.chars().all(is_safe_id_char)
}

/// Resolve the store directory for a user under the data root.
pub fn user_root(data_root: &Path, user_id: &str) -> Result<PathBuf, StorageError> {
    if !is_safe_user_id(user_id) {
        return Err(StorageError::PathTraversal(user_id.to_string()));
    }
    Ok(data_root.join(user_id))
}

/// Resolve the entries directory for a user.
pub fn entries_dir(data_root: &Path, user_id: &str) -> Result<PathBuf, StorageError> {
    Ok(user_root(data_root, user_id)?.join("entries"))
}

/// Resolve the record path for a daily entry.
///
/// The filename is derived from the date, never from client text, so no
/// further escaping is needed.
pub fn entry_path(data_root: &Path, user_id: &str, date: NaiveDate) -> Result<PathBuf, StorageError> {
    Ok(entries_dir(data_root, user_id)?.join(format!("{}.json", date.format("%Y-%m-%d"))))
}

/// Resolve the profile record path for a user.
pub fn profile_path(data_root: &Path, user_id: &str) -> Result<PathBuf, StorageError> {
    Ok(user_root(data_root, user_id)?.join("profile.json"))
}

/// Resolve the tracked-lists record path for a user.
pub fn tracked_path(data_root: &Path, user_id: &str) -> Result<PathBuf, StorageError> {
    Ok(user_root(data_root, user_id)?.join("tracked.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_identifiers() {
        assert!(is_safe_user_id("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_safe_user_id("alice"));
        assert!(is_safe_user_id("user_01@example.com"));
    }

    #[test]
    fn rejects_path_metacharacters() {
        assert!(!is_safe_user_id(""));
        assert!(!is_safe_user_id("../etc"));
        assert!(!is_safe_user_id("a/b"));
        assert!(!is_safe_user_id("a\\b"));
        assert!(!is_safe_user_id(".hidden"));
        assert!(!is_safe_user_id("null\0byte"));
    }

    #[test]
    fn traversal_attempt_is_an_error() {
        let err = user_root(Path::new("/data"), "../../escape").unwrap_err();
        assert!(matches!(err, StorageError::PathTraversal(_)));
    }

    #[test]
    fn entry_path_is_date_keyed() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let path = entry_path(Path::new("/data"), "alice", date).unwrap();
        assert_eq!(path, PathBuf::from("/data/alice/entries/2025-03-09.json"));
    }
}
