//! Profile records
//!
//! Per-user profile document: created on first bind, holds the optional
//! display name shown by the client.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StorageError;
use crate::storage;
use crate::storage::validation::profile_path;

/// Per-user profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Load a user's profile, creating it on first bind.
pub fn load_or_create_profile(data_root: &Path, user_id: &str) -> Result<Profile, StorageError> {
    let path = profile_path(data_root, user_id)?;
    match storage::read_record(&path) {
        Ok(profile) => Ok(profile),
        Err(StorageError::RecordNotFound(_)) => {
            let profile = Profile {
                display_name: None,
                created_at: Utc::now(),
            };
            storage::write_record(&path, &profile)?;
            info!("Created profile store for user {}", user_id);
            Ok(profile)
        }
        Err(e) => Err(e),
    }
}

/// Set the display name on an existing profile.
///
/// The name arrives pre-sanitized from the command layer.
pub fn set_display_name(
    data_root: &Path,
    user_id: &str,
    display_name: &str,
) -> Result<Profile, StorageError> {
    let mut profile = load_or_create_profile(data_root, user_id)?;
    profile.display_name = Some(display_name.to_string());
    storage::write_record(&profile_path(data_root, user_id)?, &profile)?;
    Ok(profile)
}
