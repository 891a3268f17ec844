//! Matching predicates shared by the lookup components.
//!
//! These are deliberately crude substring heuristics carried over from the
//! curated dataset's matching rules. Keeping them as named functions keeps
//! their exact boundaries visible and testable.

/// Substrings in a free-text message that request safety information.
const SAFETY_TRIGGERS: &[&str] = &["safe", "danger", "night"];

/// Substrings in a free-text message that request fare information.
const FARE_TRIGGERS: &[&str] = &["cost", "fare", "price", "money"];

/// Substrings in a free-text message that hint at night-time travel.
const NIGHT_HINTS: &[&str] = &["night", "evening", "dark"];

/// Substrings in a time-of-day string that classify it as night.
const NIGHT_HOUR_MARKERS: &[&str] = &["night", "22:", "23:"];

/// Case-insensitive two-way containment: true when either string contains
/// the other. Tolerates both abbreviated and elaborated place names, at the
/// cost of false positives on short tokens.
pub fn bidirectional_contains(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Night classification for a time-of-day string. Any mention of "night" or
/// an hour prefix in the 22:00-23:59 band counts; 12-hour formats and
/// locales are not handled.
pub fn is_night_hour(time_of_day: &str) -> bool {
    contains_any(time_of_day, NIGHT_HOUR_MARKERS)
}

pub fn message_mentions_night(message: &str) -> bool {
    contains_any(message, NIGHT_HINTS)
}

pub fn wants_safety_info(message: &str) -> bool {
    contains_any(message, SAFETY_TRIGGERS)
}

pub fn wants_fare_info(message: &str) -> bool {
    contains_any(message, FARE_TRIGGERS)
}

/// Normalizes a city name to its storage-key form: trimmed, lowercased,
/// whitespace replaced with underscores ("Cape Town" -> "cape_town").
pub fn city_key(city: &str) -> String {
    city.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

// Message triggers are literal, case-sensitive substrings.
fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
