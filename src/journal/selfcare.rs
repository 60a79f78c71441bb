//! Self-care suggestion catalog
//!
//! Techniques surfaced after a check-in once stress or red flags cross the
//! follow-up thresholds.

use serde::Serialize;

/// Stress level at or above which a check-in triggers follow-up.
pub const FOLLOW_UP_STRESS_LEVEL: u8 = 7;

/// A self-care technique with the stress level it applies from.
#[derive(Debug, Clone, Serialize)]
pub struct Technique {
    pub name: &'static str,
    pub description: &'static str,
    min_stress: u8,
}

static TECHNIQUES: &[Technique] = &[
    Technique {
        name: "Deep Breathing",
        description: "Take 5 deep breaths. Inhale for 4 counts, hold for 4, exhale for 6.",
        min_stress: 5,
    },
    Technique {
        name: "5-4-3-2-1 Grounding Technique",
        description: "Notice 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
        min_stress: 6,
    },
    Technique {
        name: "ROSA Worksheet",
        description: "Reflect on: R - Recognize the feeling, O - Observe without judgment, S - Step back and breathe, A - Act with awareness.",
        min_stress: 7,
    },
    Technique {
        name: "Progressive Muscle Relaxation",
        description: "Tense and release each muscle group starting from your toes up to your head.",
        min_stress: 8,
    },
];

/// Whether a check-in warrants self-care follow-up.
pub fn follow_up_due(stress_level: u8, red_flag_count: usize) -> bool {
    stress_level >= FOLLOW_UP_STRESS_LEVEL || red_flag_count > 0
}

/// Techniques applicable at the given stress level.
pub fn suggestions_for(stress_level: u8) -> Vec<Technique> {
    TECHNIQUES
        .iter()
        .filter(|t| stress_level >= t.min_stress)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stress_without_flags_needs_no_follow_up() {
        assert!(!follow_up_due(4, 0));
        assert!(!follow_up_due(6, 0));
    }

    #[test]
    fn high_stress_or_red_flags_trigger_follow_up() {
        assert!(follow_up_due(7, 0));
        assert!(follow_up_due(1, 1));
    }

    #[test]
    fn suggestions_accumulate_with_stress() {
        assert!(suggestions_for(4).is_empty());
        assert_eq!(suggestions_for(5).len(), 1);
        assert_eq!(suggestions_for(7).len(), 3);
        assert_eq!(suggestions_for(10).len(), 4);
    }
}
