//! Claim normalization.
//!
//! Extracts a structured subject/relation/object triple from raw text when
//! one of a fixed set of relation patterns matches. Patterns are tried in a
//! fixed order and the first match wins; if nothing matches, the claim is
//! carried forward unstructured with the full lowercased text as subject.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Whether a relation pattern matched the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    Structured,
    Unstructured,
}

/// The relation a structured claim asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    CapitalOf,
    Count,
    LocatedIn,
    InventedBy,
    IsA,
    None,
}

/// A normalized claim extracted from a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub kind: ClaimKind,
    pub relation: Relation,
    pub subject: String,
    pub object: Option<String>,
    /// Asserted quantity; only set for [`Relation::Count`]
    pub value: Option<i64>,
}

impl Claim {
    pub fn is_structured(&self) -> bool {
        self.kind == ClaimKind::Structured
    }
}

// Relation patterns in match order. Lazy captures keep the subject as
// short as possible so "X is the capital of Y" splits at the first
// occurrence of the relation phrase.
static CAPITAL_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?) is the capital of (.*)").expect("invalid regex"));

static COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?) has (\d+) (.*)").expect("invalid regex"));

static LOCATED_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?) is in (.*)").expect("invalid regex"));

static INVENTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?) invented (.*)").expect("invalid regex"));

static IS_A: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?) is a (.*)").expect("invalid regex"));

/// Title-case a lowercased phrase word by word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a naive plural from a counted noun: "ies" becomes "y", otherwise
/// one trailing "s" is removed.
fn singularize(noun: &str) -> String {
    if let Some(stem) = noun.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = noun.strip_suffix('s') {
        stem.to_string()
    } else {
        noun.to_string()
    }
}

fn structured(relation: Relation, subject: &str, object: &str) -> Claim {
    Claim {
        kind: ClaimKind::Structured,
        relation,
        subject: title_case(subject),
        object: Some(title_case(object)),
        value: None,
    }
}

/// Normalize raw text into a [`Claim`]. Never fails: if no relation
/// pattern matches, the claim comes back unstructured.
pub fn normalize_claim(text: &str) -> Claim {
    let text = text.trim().to_lowercase();

    if let Some(caps) = CAPITAL_OF.captures(&text) {
        return structured(Relation::CapitalOf, &caps[1], &caps[2]);
    }

    if let Some(caps) = COUNT.captures(&text) {
        // The numeric group only admits ASCII digits; values too large for
        // i64 are out of scope for short declarative statements.
        if let Ok(value) = caps[2].parse::<i64>() {
            return Claim {
                kind: ClaimKind::Structured,
                relation: Relation::Count,
                subject: title_case(&caps[1]),
                object: Some(singularize(&caps[3])),
                value: Some(value),
            };
        }
    }

    if let Some(caps) = LOCATED_IN.captures(&text) {
        return structured(Relation::LocatedIn, &caps[1], &caps[2]);
    }

    if let Some(caps) = INVENTED.captures(&text) {
        return structured(Relation::InventedBy, &caps[1], &caps[2]);
    }

    if let Some(caps) = IS_A.captures(&text) {
        return structured(Relation::IsA, &caps[1], &caps[2]);
    }

    Claim {
        kind: ClaimKind::Unstructured,
        relation: Relation::None,
        subject: text,
        object: None,
        value: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capital_of() {
        let claim = normalize_claim("Delhi is the capital of India");
        assert_eq!(
            claim,
            Claim {
                kind: ClaimKind::Structured,
                relation: Relation::CapitalOf,
                subject: "Delhi".to_string(),
                object: Some("India".to_string()),
                value: None,
            }
        );
    }

    #[test]
    fn test_count_with_singularization() {
        let claim = normalize_claim("India has 29 states");
        assert_eq!(claim.relation, Relation::Count);
        assert_eq!(claim.subject, "India");
        assert_eq!(claim.object.as_deref(), Some("state"));
        assert_eq!(claim.value, Some(29));

        let claim = normalize_claim("The US has 50 counties");
        assert_eq!(claim.object.as_deref(), Some("county"));
    }

    #[test]
    fn test_located_in() {
        let claim = normalize_claim("Mumbai is in India");
        assert_eq!(claim.relation, Relation::LocatedIn);
        assert_eq!(claim.subject, "Mumbai");
        assert_eq!(claim.object.as_deref(), Some("India"));
    }

    #[test]
    fn test_invented() {
        let claim = normalize_claim("Edison invented the light bulb");
        assert_eq!(claim.relation, Relation::InventedBy);
        assert_eq!(claim.subject, "Edison");
        assert_eq!(claim.object.as_deref(), Some("The Light Bulb"));
    }

    #[test]
    fn test_is_a() {
        let claim = normalize_claim("A whale is a fish");
        assert_eq!(claim.relation, Relation::IsA);
        assert_eq!(claim.subject, "A Whale");
        assert_eq!(claim.object.as_deref(), Some("Fish"));
    }

    #[test]
    fn test_capital_beats_is_a() {
        // "is the capital of" is tried before "is a"
        let claim = normalize_claim("Paris is the capital of France");
        assert_eq!(claim.relation, Relation::CapitalOf);
    }

    #[test]
    fn test_unstructured_fallback() {
        let claim = normalize_claim("The Sky Looked Strange");
        assert_eq!(
            claim,
            Claim {
                kind: ClaimKind::Unstructured,
                relation: Relation::None,
                subject: "the sky looked strange".to_string(),
                object: None,
                value: None,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let claim = normalize_claim("");
        assert_eq!(claim.kind, ClaimKind::Unstructured);
        assert_eq!(claim.subject, "");
    }
}
