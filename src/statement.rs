//! Statement classification.
//!
//! Routes raw text into exactly one [`StatementKind`] using an ordered,
//! first-match-wins rule table. Question and opinion-request detection run
//! before all keyword rules: words like "best" or "capital" appear inside
//! questions and must not route them into the factual paths.

use serde::{Deserialize, Serialize};

/// The kind of statement, decided once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementKind {
    /// Interrogative form; not auditable
    Question,
    /// Asks for the system's opinion; not auditable
    OpinionRequest,
    /// Superlative/extreme claim ("poorest", "best", ...)
    Comparative,
    /// Quantity claim carrying a digit
    Numerical,
    /// Hard factual relation (capital, location, invention)
    HardFact,
    /// Opinion or sweeping generalization
    Opinion,
    /// Nothing matched; cannot be routed to a factual path
    Unverifiable,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question => write!(f, "QUESTION"),
            Self::OpinionRequest => write!(f, "OPINION_REQUEST"),
            Self::Comparative => write!(f, "COMPARATIVE"),
            Self::Numerical => write!(f, "NUMERICAL"),
            Self::HardFact => write!(f, "HARD_FACT"),
            Self::Opinion => write!(f, "OPINION"),
            Self::Unverifiable => write!(f, "UNVERIFIABLE"),
        }
    }
}

/// Leading words that mark a statement as a question even without a
/// trailing question mark.
pub const QUESTION_STARTERS: &[&str] = &[
    "what", "who", "whom", "when", "where", "why", "how", "which", "is", "are", "was", "were",
    "do", "does", "did", "can", "could", "will", "would", "should",
];

/// Phrases that mark a statement as a request for an opinion.
pub const OPINION_REQUEST_PHRASES: &[&str] = &[
    "what do you think",
    "do you think",
    "in your opinion",
    "your opinion",
    "how do you feel",
    "would you say",
];

/// One keyword rule in the classification table.
struct KeywordRule {
    kind: StatementKind,
    keywords: &'static [&'static str],
    /// The rule only fires if the text also contains a digit
    requires_digit: bool,
}

/// Keyword rules, evaluated in order after question/opinion detection.
/// First match wins.
const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        kind: StatementKind::Comparative,
        keywords: &["poorest", "richest", "best", "worst", "largest", "smallest"],
        requires_digit: false,
    },
    KeywordRule {
        kind: StatementKind::Numerical,
        keywords: &["has", "number of", "total", "count"],
        requires_digit: true,
    },
    KeywordRule {
        kind: StatementKind::HardFact,
        keywords: &["capital", "located", "is in", "invented"],
        requires_digit: false,
    },
    KeywordRule {
        kind: StatementKind::Opinion,
        keywords: &["always", "never", "naturally", "all", "none"],
        requires_digit: false,
    },
];

fn is_question(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.ends_with('?') {
        return true;
    }
    trimmed
        .split_whitespace()
        .next()
        .map(|first| QUESTION_STARTERS.contains(&first))
        .unwrap_or(false)
}

/// Classify raw text into a [`StatementKind`].
///
/// Total and deterministic: always returns a value, defaulting to
/// [`StatementKind::Unverifiable`].
pub fn classify_statement(text: &str) -> StatementKind {
    let text = text.to_lowercase();

    if is_question(&text) {
        return StatementKind::Question;
    }
    if OPINION_REQUEST_PHRASES.iter().any(|p| text.contains(p)) {
        return StatementKind::OpinionRequest;
    }

    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    for rule in KEYWORD_RULES {
        if rule.requires_digit && !has_digit {
            continue;
        }
        if rule.keywords.iter().any(|k| text.contains(k)) {
            return rule.kind;
        }
    }

    StatementKind::Unverifiable
}
