//! Journal operations
//!
//! Handles daily entry persistence for check-ins including upsert, fetch,
//! history, notes editing, deletion, and the stress trend series.

use chrono::{NaiveDate, Utc};
use log::info;
use std::path::Path;

use crate::error::{JournalError, StorageError};
use crate::journal::entry::{DailyEntry, EntryDraft};
use crate::journal::results::{CheckInResult, TrendPoint, TrendReport};
use crate::journal::selfcare::{FOLLOW_UP_STRESS_LEVEL, follow_up_due, suggestions_for};
use crate::middleware::security::sanitize_text;
use crate::storage;

/// High-stress day count above which the trend report raises a notice.
const ELEVATED_NOTICE_DAYS: usize = 3;

/// Parse a calendar date argument in `YYYY-MM-DD` form.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, JournalError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| JournalError::InvalidDate(raw.to_string()))
}

/// Save a check-in for the given date, inserting or replacing the entry.
///
/// A replaced entry keeps its original creation time. Notes are sanitized
/// before storage; a note that sanitizes to nothing is dropped.
pub fn save_entry(
    data_root: &Path,
    user_id: &str,
    date: NaiveDate,
    draft: EntryDraft,
) -> Result<CheckInResult, JournalError> {
    if !(1..=10).contains(&draft.stress_level) {
        return Err(JournalError::InvalidStressLevel(draft.stress_level));
    }

    let path = storage::entry_path(data_root, user_id, date)?;
    let now = Utc::now();

    // Upsert: an existing entry for this date keeps its creation time
    let created_at = match storage::read_record::<DailyEntry>(&path) {
        Ok(existing) => existing.created_at,
        Err(StorageError::RecordNotFound(_)) => now,
        Err(e) => return Err(e.into()),
    };

    let notes = draft
        .notes
        .as_deref()
        .map(sanitize_text)
        .filter(|n| !n.is_empty());

    let entry = DailyEntry {
        entry_date: date,
        stress_level: draft.stress_level,
        mood: draft.mood,
        selected_triggers: draft.selected_triggers,
        selected_red_flags: draft.selected_red_flags,
        selected_boundaries: draft.selected_boundaries,
        unmet_needs: draft.unmet_needs,
        notes,
        created_at,
        updated_at: now,
    };

    storage::write_record(&path, &entry)?;

    info!(
        "Saved check-in for user {} on {} (stress {}, mood {})",
        user_id, date, entry.stress_level, entry.mood
    );

    let selfcare_recommended = follow_up_due(entry.stress_level, entry.selected_red_flags.len());
    let suggestions = if selfcare_recommended {
        suggestions_for(entry.stress_level)
    } else {
        Vec::new()
    };

    Ok(CheckInResult {
        entry,
        selfcare_recommended,
        suggestions,
    })
}

/// Fetch the entry for a single date.
pub fn get_entry(
    data_root: &Path,
    user_id: &str,
    date: NaiveDate,
) -> Result<DailyEntry, JournalError> {
    let path = storage::entry_path(data_root, user_id, date)?;
    match storage::read_record(&path) {
        Ok(entry) => Ok(entry),
        Err(StorageError::RecordNotFound(_)) => {
            Err(JournalError::EntryNotFound(date.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// List entries newest-first, optionally bounded.
pub fn list_entries(
    data_root: &Path,
    user_id: &str,
    limit: Option<usize>,
) -> Result<Vec<DailyEntry>, JournalError> {
    let dir = storage::entries_dir(data_root, user_id)?;
    let dates = storage::list_entry_dates(&dir)?;

    let mut entries = Vec::new();
    for date in dates.into_iter().rev() {
        if let Some(limit) = limit
            && entries.len() >= limit
        {
            break;
        }
        entries.push(get_entry(data_root, user_id, date)?);
    }

    Ok(entries)
}

/// Replace the notes on an existing entry.
///
/// The text is sanitized before storage; callers enforce the length policy
/// beforehand via the validator.
pub fn update_notes(
    data_root: &Path,
    user_id: &str,
    date: NaiveDate,
    notes: &str,
) -> Result<DailyEntry, JournalError> {
    let path = storage::entry_path(data_root, user_id, date)?;
    let mut entry: DailyEntry = match storage::read_record(&path) {
        Ok(entry) => entry,
        Err(StorageError::RecordNotFound(_)) => {
            return Err(JournalError::EntryNotFound(date.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let sanitized = sanitize_text(notes);
    entry.notes = if sanitized.is_empty() {
        None
    } else {
        Some(sanitized)
    };
    entry.updated_at = Utc::now();

    storage::write_record(&path, &entry)?;

    info!("Updated notes for user {} on {}", user_id, date);
    Ok(entry)
}

/// Delete the entry for a date.
pub fn delete_entry(data_root: &Path, user_id: &str, date: NaiveDate) -> Result<(), JournalError> {
    let path = storage::entry_path(data_root, user_id, date)?;
    match storage::delete_record(&path) {
        Ok(()) => {
            info!("Deleted entry for user {} on {}", user_id, date);
            Ok(())
        }
        Err(StorageError::RecordNotFound(_)) => {
            Err(JournalError::EntryNotFound(date.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Build the stress trend series: the most recent entries in ascending date
/// order, capped at `window`, with the dashboard summary stats.
pub fn stress_trend(
    data_root: &Path,
    user_id: &str,
    window: usize,
) -> Result<TrendReport, JournalError> {
    let dir = storage::entries_dir(data_root, user_id)?;
    let dates = storage::list_entry_dates(&dir)?;

    let recent = dates
        .iter()
        .skip(dates.len().saturating_sub(window))
        .copied();

    let mut points = Vec::new();
    for date in recent {
        let entry = get_entry(data_root, user_id, date)?;
        points.push(TrendPoint {
            date,
            stress_level: entry.stress_level,
            mood: entry.mood,
        });
    }

    let average_stress = if points.is_empty() {
        0.0
    } else {
        let sum: u32 = points.iter().map(|p| u32::from(p.stress_level)).sum();
        let mean = f64::from(sum) / points.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    let high_stress_days = points
        .iter()
        .filter(|p| p.stress_level >= FOLLOW_UP_STRESS_LEVEL)
        .count();

    Ok(TrendReport {
        points,
        average_stress,
        high_stress_days,
        elevated: high_stress_days > ELEVATED_NOTICE_DAYS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::entry::Mood;

    fn draft(stress: u8, mood: Mood) -> EntryDraft {
        serde_json::from_value(serde_json::json!({
            "stress_level": stress,
            "mood": mood.as_str(),
        }))
        .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn parse_entry_date_accepts_iso_dates() {
        assert_eq!(parse_entry_date("2025-03-09").unwrap(), date(9));
        assert!(parse_entry_date("03/09/2025").is_err());
        assert!(parse_entry_date("2025-13-01").is_err());
    }

    #[test]
    fn save_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_entry(dir.path(), "alice", date(1), draft(4, Mood::Good)).unwrap();
        assert!(!result.selfcare_recommended);

        let entry = get_entry(dir.path(), "alice", date(1)).unwrap();
        assert_eq!(entry.stress_level, 4);
        assert_eq!(entry.mood, Mood::Good);
    }

    #[test]
    fn stress_level_out_of_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            save_entry(dir.path(), "alice", date(1), draft(0, Mood::Okay)),
            Err(JournalError::InvalidStressLevel(0))
        ));
        assert!(matches!(
            save_entry(dir.path(), "alice", date(1), draft(11, Mood::Okay)),
            Err(JournalError::InvalidStressLevel(11))
        ));
    }

    #[test]
    fn upsert_keeps_creation_time() {
        let dir = tempfile::tempdir().unwrap();
        let first = save_entry(dir.path(), "alice", date(1), draft(3, Mood::Okay)).unwrap();
        let second = save_entry(dir.path(), "alice", date(1), draft(8, Mood::Stressed)).unwrap();

        assert_eq!(second.entry.created_at, first.entry.created_at);
        assert!(second.entry.updated_at >= first.entry.updated_at);
        assert_eq!(
            get_entry(dir.path(), "alice", date(1)).unwrap().stress_level,
            8
        );
    }

    #[test]
    fn notes_are_sanitized_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut d = draft(5, Mood::Anxious);
        d.notes = Some("  <b>rough</b> day & night  ".to_string());

        let result = save_entry(dir.path(), "alice", date(2), d).unwrap();
        assert_eq!(result.entry.notes.as_deref(), Some("rough day &amp; night"));
    }

    #[test]
    fn high_stress_check_in_recommends_selfcare() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_entry(dir.path(), "alice", date(3), draft(8, Mood::Overwhelmed)).unwrap();
        assert!(result.selfcare_recommended);
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn red_flags_alone_recommend_selfcare() {
        let dir = tempfile::tempdir().unwrap();
        let d: EntryDraft = serde_json::from_value(serde_json::json!({
            "stress_level": 2,
            "mood": "good",
            "selected_red_flags": ["Poor sleep"],
        }))
        .unwrap();

        let result = save_entry(dir.path(), "alice", date(4), d).unwrap();
        assert!(result.selfcare_recommended);
        // Low stress matches no specific technique
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn history_is_newest_first_and_bounded() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=5 {
            save_entry(dir.path(), "alice", date(day), draft(day as u8, Mood::Okay)).unwrap();
        }

        let all = list_entries(dir.path(), "alice", None).unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].entry_date, date(5));
        assert_eq!(all[4].entry_date, date(1));

        let bounded = list_entries(dir.path(), "alice", Some(2)).unwrap();
        assert_eq!(bounded.len(), 2);
        assert_eq!(bounded[0].entry_date, date(5));
        assert_eq!(bounded[1].entry_date, date(4));
    }

    #[test]
    fn update_notes_requires_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            update_notes(dir.path(), "alice", date(1), "hello"),
            Err(JournalError::EntryNotFound(_))
        ));

        save_entry(dir.path(), "alice", date(1), draft(4, Mood::Good)).unwrap();
        let entry = update_notes(dir.path(), "alice", date(1), "<i>better</i> now").unwrap();
        assert_eq!(entry.notes.as_deref(), Some("better now"));
    }

    #[test]
    fn delete_removes_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        save_entry(dir.path(), "alice", date(1), draft(4, Mood::Good)).unwrap();
        delete_entry(dir.path(), "alice", date(1)).unwrap();

        assert!(matches!(
            get_entry(dir.path(), "alice", date(1)),
            Err(JournalError::EntryNotFound(_))
        ));
        assert!(matches!(
            delete_entry(dir.path(), "alice", date(1)),
            Err(JournalError::EntryNotFound(_))
        ));
    }

    #[test]
    fn trend_is_ascending_capped_with_stats() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=6 {
            let stress = if day >= 3 { 8 } else { 2 };
            save_entry(dir.path(), "alice", date(day), draft(stress, Mood::Okay)).unwrap();
        }

        // Window of 4 keeps days 3..=6, all high stress
        let report = stress_trend(dir.path(), "alice", 4).unwrap();
        assert_eq!(report.points.len(), 4);
        assert_eq!(report.points[0].date, date(3));
        assert_eq!(report.points[3].date, date(6));
        assert_eq!(report.average_stress, 8.0);
        assert_eq!(report.high_stress_days, 4);
        assert!(report.elevated);
    }

    #[test]
    fn trend_average_rounds_to_one_decimal() {
        let dir = tempfile::tempdir().unwrap();
        for (day, stress) in [(1, 2), (2, 3), (3, 3)] {
            save_entry(dir.path(), "alice", date(day), draft(stress, Mood::Okay)).unwrap();
        }

        let report = stress_trend(dir.path(), "alice", 30).unwrap();
        // (2 + 3 + 3) / 3 = 2.666... -> 2.7
        assert_eq!(report.average_stress, 2.7);
        assert_eq!(report.high_stress_days, 0);
        assert!(!report.elevated);
    }

    #[test]
    fn empty_trend_is_zeroed() {
        let dir = tempfile::tempdir().unwrap();
        let report = stress_trend(dir.path(), "alice", 30).unwrap();
        assert!(report.points.is_empty());
        assert_eq!(report.average_stress, 0.0);
        assert!(!report.elevated);
    }
}
