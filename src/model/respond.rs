//! Canned response rules keyed on the raw review text.
//!
//! The substrings and their ordering are load-bearing: rules are checked
//! first to last and the first hit wins, so reordering changes output.
//! A review mentioning both the wait and the cold food gets the wait
//! message because that rule comes first.

/// Ordered (keywords, message) rules for negative predictions.
const NEGATIVE_RULES: &[(&[&str], &str)] = &[
    (
        &["wait", "slow", "time", "hour"],
        "Yikes! 🐌 Our snails move faster than that service. Message received!",
    ),
    (
        &["taste", "flavor", "salty", "bland", "cold"],
        "Did the chef fall asleep? 🧂 We're sending this feedback to the kitchen!",
    ),
    (
        &["money", "expensive"],
        "Ouch, that hurts the wallet and the feelings. 💸",
    ),
];

const NEGATIVE_FALLBACK: &str = "We messed up. Thanks for the honest reality check.";

/// Ordered (keywords, message) rules for positive predictions.
const POSITIVE_RULES: &[(&[&str], &str)] = &[
    (
        &["delicious", "yummy", "tasty", "great food"],
        "Chef's Kiss! 👩‍🍳💋 We're framing this review!",
    ),
    (
        &["staff", "service", "waiter", "waitress"],
        "Give that staff member a raise! 🏆",
    ),
    (&["atmosphere", "place"], "Vibes: Immaculate. ✨"),
];

const POSITIVE_FALLBACK: &str = "You just made our day! 😊";

/// Pick the canned message for a predicted label, matching against the
/// lowercased raw input.
pub fn custom_message(label: u8, raw_text: &str) -> &'static str {
    let lower = raw_text.to_lowercase();
    let (rules, fallback) = if label == 0 {
        (NEGATIVE_RULES, NEGATIVE_FALLBACK)
    } else {
        (POSITIVE_RULES, POSITIVE_FALLBACK)
    };
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, message)| *message)
        .unwrap_or(fallback)
}
