//! Module `entry`
//!
//! Defines the daily entry record and the client-supplied draft it is built
//! from, including the mood scale used during check-in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Mood selected during a daily check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Stressed,
    Anxious,
    Sad,
    Angry,
    Overwhelmed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Overwhelmed => "overwhelmed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored daily journal entry, keyed by user and calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub entry_date: NaiveDate,
    pub stress_level: u8,
    pub mood: Mood,
    #[serde(default, deserialize_with = "string_or_list")]
    pub selected_triggers: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub selected_red_flags: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub selected_boundaries: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub unmet_needs: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied check-in payload, before it becomes a stored entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDraft {
    pub stress_level: u8,
    pub mood: Mood,
    #[serde(default, deserialize_with = "string_or_list")]
    pub selected_triggers: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub selected_red_flags: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub selected_boundaries: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub unmet_needs: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Accept either a single string or a list of strings.
///
/// Early records stored one selection as a bare string instead of a
/// one-element list. The variant is resolved here, at the record boundary,
/// so the rest of the crate only ever sees `Vec<String>`.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<StringOrList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(StringOrList::One(item)) => vec![item],
        Some(StringOrList::Many(items)) => items,
    })
}
