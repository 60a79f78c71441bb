//! Universal human needs catalog
//!
//! The static checklist offered during check-in for marking unmet needs.
//! Entries store selections as plain text, so the catalog is advisory: it is
//! served to clients rather than enforced on writes.

use serde::Serialize;

/// One category of the needs checklist.
#[derive(Debug, Clone, Serialize)]
pub struct NeedGroup {
    pub category: &'static str,
    pub needs: &'static [&'static str],
}

static NEED_GROUPS: &[NeedGroup] = &[
    NeedGroup {
        category: "Subsistence and Security",
        needs: &[
            "Air", "Food", "Health", "Movement", "Physical safety", "Rest/sleep", "Shelter",
            "Touch", "Water", "Consistency", "Order/Structure", "Peace (external)",
            "Peace of mind", "Protection", "Safety (emotional)", "Stability", "Trusting",
        ],
    },
    NeedGroup {
        category: "Freedom",
        needs: &[
            "Choice", "Ease", "Independence", "Power", "Self-responsibility", "Space",
            "Spontaneity", "Humor", "Joy", "Play", "Pleasure", "Rejuvenation",
        ],
    },
    NeedGroup {
        category: "Connection",
        needs: &[
            "Appreciation", "Attention", "Closeness", "Companionship", "Harmony", "Intimacy",
            "Love", "Nurturing", "Sexual expression", "Tenderness", "Warmth", "Acceptance",
            "Care", "Compassion", "Consideration", "Empathy", "Kindness", "Mutual respect",
            "Respect", "To be heard", "To be seen", "To be known", "To be understood",
            "To be trusted", "Understanding others", "Belonging", "Communication",
            "Cooperation", "Equality", "Inclusion", "Mutuality", "Participation",
            "Partnership", "Self-expression", "Sharing",
        ],
    },
    NeedGroup {
        category: "Meaning",
        needs: &[
            "Authenticity", "Competence", "Creativity", "Dignity", "Growth", "Healing",
            "Honesty", "Integrity", "Self-acceptance", "Self-care", "Self-connection",
            "Self-knowledge", "Self-realization", "Mattering to myself", "Awareness",
            "Clarity", "Discovery", "Learning", "Making sense of life", "Stimulation",
            "Aliveness", "Challenge", "Consciousness", "Contribution", "Effectiveness",
            "Exploration", "Integration", "Purpose", "Beauty", "Celebration of life",
            "Communion", "Faith", "Flow", "Hope", "Inspiration", "Mourning",
            "Peace (internal)", "Presence",
        ],
    },
];

/// The full needs catalog, grouped by category.
pub fn needs_catalog() -> &'static [NeedGroup] {
    NEED_GROUPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_categories() {
        let categories: Vec<&str> = needs_catalog().iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec!["Subsistence and Security", "Freedom", "Connection", "Meaning"]
        );
    }

    #[test]
    fn no_category_is_empty() {
        for group in needs_catalog() {
            assert!(!group.needs.is_empty(), "{} is empty", group.category);
        }
    }
}
