//! Daily quote selection
//!
//! Serves the dashboard's inspiration quote. Selection is keyed by
//! day-of-year so every client sees the same quote on the same date,
//! with no stored state.

use chrono::{Datelike, Local, NaiveDate};

static QUOTES: &[&str] = &[
    "The greatest revolution of our generation is the discovery that human beings, by changing the inner attitudes of their minds, can change the outer aspects of their lives.",
    "You have been assigned this mountain to show others it can be moved.",
    "Stress is caused by being 'here' but wanting to be 'there.'",
    "Take time to be still, in a world that never stops moving.",
    "You are braver than you believe, stronger than you seem, and smarter than you think.",
    "Progress, not perfection.",
    "Every small step in the right direction can turn out to be the biggest step of your life.",
    "Healing isn't about erasing scars, it's about learning to live beautifully with them.",
    "Your mental health is a priority. Your happiness is essential. Your self-care is a necessity.",
    "It's okay to not be okay, but it's not okay to stay that way.",
    "Breathe in peace, breathe out stress.",
    "You don't have to control your thoughts. You just have to stop letting them control you.",
    "Self-compassion is simply giving the same kindness to ourselves that we would give to others.",
    "The mind is everything. What you think you become.",
    "Be patient with yourself. Nothing in nature blooms all year.",
];

/// Quote for a given date, selected by day-of-year.
pub fn quote_for_date(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal() as usize % QUOTES.len()]
}

/// Today's quote in the server's local calendar.
pub fn daily_quote() -> &'static str {
    quote_for_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_date_same_quote() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(quote_for_date(date), quote_for_date(date));
    }

    #[test]
    fn selection_cycles_through_catalog() {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let first = quote_for_date(base);
        let wrapped = quote_for_date(base + chrono::Days::new(QUOTES.len() as u64));
        assert_eq!(first, wrapped);

        let next = quote_for_date(base + chrono::Days::new(1));
        assert_ne!(first, next);
    }
}
