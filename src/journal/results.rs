//! Journal result types
//!
//! Defines result structures returned by journal operations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::journal::entry::{DailyEntry, Mood};
use crate::journal::selfcare::Technique;

/// Result of saving a check-in, including any self-care follow-up.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResult {
    pub entry: DailyEntry,
    /// True when the entry's stress level or red flags warrant follow-up
    pub selfcare_recommended: bool,
    pub suggestions: Vec<Technique>,
}

/// One point of the stress trend series.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub stress_level: u8,
    pub mood: Mood,
}

/// Bounded stress trend series with the dashboard summary stats.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    /// Points in ascending date order, at most the configured window
    pub points: Vec<TrendPoint>,
    /// Mean stress level rounded to one decimal, 0.0 when empty
    pub average_stress: f64,
    /// Days at stress level 7 or above
    pub high_stress_days: usize,
    /// Set when the high-stress count passes the notice threshold
    pub elevated: bool,
}
