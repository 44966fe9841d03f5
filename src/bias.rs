//! Rule-based bias detection.
//!
//! A deliberate backstop beneath the ML bias classifier: a fixed table of
//! category → phrase list, scanned in order with plain substring
//! containment. Guaranteed total; never raises.

use crate::verdict::BiasType;

/// Phrase table scanned in order; the first category with any matching
/// phrase wins. Public so tests can enumerate it directly.
pub const BIAS_PATTERNS: &[(BiasType, &[&str])] = &[
    (
        BiasType::Gender,
        &["women are", "men are", "girls are", "boys are"],
    ),
    (
        BiasType::Social,
        &["poor people", "rich people", "indian people"],
    ),
    (BiasType::Ethical, &["disabled people", "old people"]),
    (BiasType::Racial, &["black people", "white people"]),
];

/// Scan text for known biased phrasings.
///
/// Returns `(true, category)` for the first category whose any phrase is a
/// substring of the lowercased text, else `(false, BiasType::None)`.
pub fn rule_based_bias_check(text: &str) -> (bool, BiasType) {
    let text = text.to_lowercase();

    for (category, phrases) in BIAS_PATTERNS {
        if phrases.iter().any(|p| text.contains(p)) {
            return (true, *category);
        }
    }

    (false, BiasType::None)
}
