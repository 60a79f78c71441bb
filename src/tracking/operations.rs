//! Tracked list operations
//!
//! Loads and mutates a user's tracked lists with the duplicate and capacity
//! rules the check-in screens rely on.

use log::info;
use std::path::Path;

use crate::error::{StorageError, TrackingError};
use crate::storage;
use crate::storage::validation::tracked_path;
use crate::tracking::lists::{ListKind, TrackedLists};

/// Load a user's tracked lists, empty when none have been saved yet.
pub fn load_lists(data_root: &Path, user_id: &str) -> Result<TrackedLists, TrackingError> {
    let path = tracked_path(data_root, user_id)?;
    match storage::read_record(&path) {
        Ok(lists) => Ok(lists),
        Err(StorageError::RecordNotFound(_)) => Ok(TrackedLists::default()),
        Err(e) => Err(e.into()),
    }
}

/// Add an item to a tracked list.
///
/// Items are stored as given; sanitization and length policy run at the
/// command layer. Duplicates and additions past the cap are rejected.
pub fn add_item(
    data_root: &Path,
    user_id: &str,
    kind: ListKind,
    item: &str,
    cap: usize,
) -> Result<TrackedLists, TrackingError> {
    let mut lists = load_lists(data_root, user_id)?;
    let list = lists.list_mut(kind);

    if list.iter().any(|existing| existing == item) {
        return Err(TrackingError::DuplicateItem(item.to_string()));
    }

    if list.len() >= cap {
        return Err(TrackingError::ListFull {
            kind: kind.to_string(),
            limit: cap,
        });
    }

    list.push(item.to_string());
    storage::write_record(&tracked_path(data_root, user_id)?, &lists)?;

    info!("User {} tracked {} item", user_id, kind);
    Ok(lists)
}

/// Remove an item from a tracked list by exact text.
pub fn remove_item(
    data_root: &Path,
    user_id: &str,
    kind: ListKind,
    item: &str,
) -> Result<TrackedLists, TrackingError> {
    let mut lists = load_lists(data_root, user_id)?;
    let list = lists.list_mut(kind);

    let before = list.len();
    list.retain(|existing| existing != item);
    if list.len() == before {
        return Err(TrackingError::ItemNotFound(item.to_string()));
    }

    storage::write_record(&tracked_path(data_root, user_id)?, &lists)?;

    info!("User {} untracked {} item", user_id, kind);
    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_start_empty() {
        let dir = tempfile::tempdir().unwrap();
        let lists = load_lists(dir.path(), "alice").unwrap();
        assert!(!lists.is_onboarded());
    }

    #[test]
    fn added_items_persist_in_order() {
        let dir = tempfile::tempdir().unwrap();
        add_item(dir.path(), "alice", ListKind::Triggers, "Work deadlines", 40).unwrap();
        add_item(dir.path(), "alice", ListKind::Triggers, "Traffic", 40).unwrap();

        let lists = load_lists(dir.path(), "alice").unwrap();
        assert_eq!(lists.triggers, vec!["Work deadlines", "Traffic"]);
        assert!(lists.is_onboarded());
    }

    #[test]
    fn duplicates_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        add_item(dir.path(), "alice", ListKind::RedFlags, "Poor sleep", 40).unwrap();

        assert!(matches!(
            add_item(dir.path(), "alice", ListKind::RedFlags, "Poor sleep", 40),
            Err(TrackingError::DuplicateItem(_))
        ));
    }

    #[test]
    fn cap_is_enforced_per_list() {
        let dir = tempfile::tempdir().unwrap();
        add_item(dir.path(), "alice", ListKind::Boundaries, "first", 2).unwrap();
        add_item(dir.path(), "alice", ListKind::Boundaries, "second", 2).unwrap();

        assert!(matches!(
            add_item(dir.path(), "alice", ListKind::Boundaries, "third", 2),
            Err(TrackingError::ListFull { limit: 2, .. })
        ));

        // Other lists are unaffected by a full one
        add_item(dir.path(), "alice", ListKind::Triggers, "still fine", 2).unwrap();
    }

    #[test]
    fn removal_is_by_exact_text() {
        let dir = tempfile::tempdir().unwrap();
        add_item(dir.path(), "alice", ListKind::Triggers, "Traffic", 40).unwrap();

        assert!(matches!(
            remove_item(dir.path(), "alice", ListKind::Triggers, "traffic"),
            Err(TrackingError::ItemNotFound(_))
        ));

        let lists = remove_item(dir.path(), "alice", ListKind::Triggers, "Traffic").unwrap();
        assert!(lists.triggers.is_empty());
    }
}
