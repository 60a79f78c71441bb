//! Module `lists`
//!
//! Defines the tracked list record and the kinds of list a user maintains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three personalization lists kept per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    RedFlags,
    Triggers,
    Boundaries,
}

impl ListKind {
    /// Parse a list kind from a command argument.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "red_flags" | "redflags" => Some(ListKind::RedFlags),
            "triggers" => Some(ListKind::Triggers),
            "boundaries" => Some(ListKind::Boundaries),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::RedFlags => "red_flags",
            ListKind::Triggers => "triggers",
            ListKind::Boundaries => "boundaries",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-user tracked lists record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackedLists {
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub boundaries: Vec<String>,
}

impl TrackedLists {
    pub fn list(&self, kind: ListKind) -> &Vec<String> {
        match kind {
            ListKind::RedFlags => &self.red_flags,
            ListKind::Triggers => &self.triggers,
            ListKind::Boundaries => &self.boundaries,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::RedFlags => &mut self.red_flags,
            ListKind::Triggers => &mut self.triggers,
            ListKind::Boundaries => &mut self.boundaries,
        }
    }

    /// A user counts as onboarded once any list has content.
    pub fn is_onboarded(&self) -> bool {
        !self.red_flags.is_empty() || !self.triggers.is_empty() || !self.boundaries.is_empty()
    }
}
