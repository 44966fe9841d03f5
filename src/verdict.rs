//! Final verdict record and the enums it is built from.
//!
//! A [`Verdict`] is produced once per audited statement and is immutable
//! after the orchestrator returns it. The serialized field names match the
//! wire shape consumed by downstream reporting tools.

use serde::{Deserialize, Serialize};

use crate::evidence::Evidence;

/// Outcome of fact verification for a statement.
///
/// The status starts at `Unverifiable` and is only changed by three stages:
/// claim verification, the contradiction override, and the commonsense
/// fallback override. Later stages override earlier ones; they are not
/// independent votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruthStatus {
    True,
    False,
    Misleading,
    #[serde(rename = "Partially true")]
    PartiallyTrue,
    Unverifiable,
    #[serde(rename = "Not applicable")]
    NotApplicable,
}

impl std::fmt::Display for TruthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Misleading => write!(f, "Misleading"),
            Self::PartiallyTrue => write!(f, "Partially true"),
            Self::Unverifiable => write!(f, "Unverifiable"),
            Self::NotApplicable => write!(f, "Not applicable"),
        }
    }
}

/// Kind of hallucination reported in a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HallucinationType {
    /// No hallucination detected
    None,
    /// Contradicts verified facts
    Factual,
    /// Internally inconsistent or misleading framing
    Logical,
    /// The statement's error is a biased generalization
    Bias,
}

impl std::fmt::Display for HallucinationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Factual => write!(f, "factual"),
            Self::Logical => write!(f, "logical"),
            Self::Bias => write!(f, "bias"),
        }
    }
}

/// Category of bias reported in a verdict.
///
/// `Gender`, `Social`, `Ethical` and `Racial` are producible by the
/// rule-based detector; `Political` only ever comes from the ML classifier
/// or the commonsense reasoner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasType {
    None,
    Gender,
    Social,
    Ethical,
    Racial,
    Political,
}

impl std::fmt::Display for BiasType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Gender => write!(f, "gender"),
            Self::Social => write!(f, "social"),
            Self::Ethical => write!(f, "ethical"),
            Self::Racial => write!(f, "racial"),
            Self::Political => write!(f, "political"),
        }
    }
}

/// Final output of one audit: detection flags, truth status, correction
/// and the evidence the decision rested on.
///
/// Invariants (checked by [`Verdict::check_consistency`]):
/// - `bias_type != None` implies `bias_detected`
/// - `hallucination_type != None` implies `hallucination_detected`
/// - `truth_status == NotApplicable` implies both flags are off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The raw statement that was audited
    pub input_statement: String,
    pub hallucination_detected: bool,
    pub hallucination_type: HallucinationType,
    pub bias_detected: bool,
    pub bias_type: BiasType,
    pub truth_status: TruthStatus,
    /// A corrected or neutral rephrasing of the statement
    pub corrected_statement: String,
    /// Evidence the decision rested on; at most one item
    pub sources: Vec<Evidence>,
    /// Human-readable summary of how the decision was reached
    pub explanation: String,
}

impl Verdict {
    /// Verify the cross-field invariants. Intended for tests and debug
    /// assertions; production verdicts are constructed to satisfy them.
    pub fn check_consistency(&self) -> bool {
        if self.bias_type != BiasType::None && !self.bias_detected {
            return false;
        }
        if self.hallucination_type != HallucinationType::None && !self.hallucination_detected {
            return false;
        }
        if self.truth_status == TruthStatus::NotApplicable
            && (self.hallucination_detected
                || self.bias_detected
                || self.bias_type != BiasType::None
                || self.hallucination_type != HallucinationType::None)
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&TruthStatus::PartiallyTrue).unwrap(),
            "\"Partially true\""
        );
        assert_eq!(
            serde_json::to_string(&TruthStatus::NotApplicable).unwrap(),
            "\"Not applicable\""
        );
        assert_eq!(serde_json::to_string(&TruthStatus::True).unwrap(), "\"True\"");
    }

    #[test]
    fn test_enum_display_matches_serde() {
        for t in [
            HallucinationType::None,
            HallucinationType::Factual,
            HallucinationType::Logical,
            HallucinationType::Bias,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json.trim_matches('"'), t.to_string());
        }
        for b in [
            BiasType::None,
            BiasType::Gender,
            BiasType::Social,
            BiasType::Ethical,
            BiasType::Racial,
            BiasType::Political,
        ] {
            let json = serde_json::to_string(&b).unwrap();
            assert_eq!(json.trim_matches('"'), b.to_string());
        }
    }

    #[test]
    fn test_consistency_check() {
        let verdict = Verdict {
            input_statement: "x".to_string(),
            hallucination_detected: false,
            hallucination_type: HallucinationType::None,
            bias_detected: false,
            bias_type: BiasType::None,
            truth_status: TruthStatus::Unverifiable,
            corrected_statement: String::new(),
            sources: Vec::new(),
            explanation: String::new(),
        };
        assert!(verdict.check_consistency());

        let mut bad = verdict.clone();
        bad.bias_type = BiasType::Gender;
        assert!(!bad.check_consistency());

        let mut bad = verdict.clone();
        bad.truth_status = TruthStatus::NotApplicable;
        bad.hallucination_detected = true;
        bad.hallucination_type = HallucinationType::Factual;
        assert!(!bad.check_consistency());
    }
}
