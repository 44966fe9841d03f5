//! Decision orchestration.
//!
//! The [`Auditor`] sequences classification, normalization, risk
//! estimation, fact verification, the contradiction override and the
//! commonsense fallback into one final [`Verdict`]. Stage order is total:
//! later stages are specified as overrides of earlier ones, not
//! independent votes, so the pipeline must not be reordered.
//!
//! No stage may abort verdict production. Every external call site
//! collapses failure into its fail-safe value, so `audit` returns a
//! well-formed verdict for any input text, including the empty string.

use std::sync::Arc;
use tracing::debug;

use crate::bias::rule_based_bias_check;
use crate::claim::{normalize_claim, Claim};
use crate::contradiction::check_contradiction;
use crate::evidence::{CapitalProvider, Evidence, SummaryProvider};
use crate::reasoner::{CommonsenseReasoner, Judgment, JudgmentVerdict};
use crate::risk::{RiskAssessment, RiskEstimator};
use crate::statement::{classify_statement, StatementKind};
use crate::verdict::{BiasType, HallucinationType, TruthStatus, Verdict};
use crate::verify::ClaimVerifier;

const BIAS_CORRECTION: &str = "This statement contains bias and should be rephrased neutrally.";
const UNVERIFIABLE_CORRECTION: &str = "This claim is generally false or unverifiable.";
const NO_CORRECTION: &str = "No correction required.";
const NOT_APPLICABLE_NOTE: &str =
    "The input is a question or a request for opinion and is not evaluated for factual accuracy.";
const METHODOLOGY_NOTE: &str = "Decision made using ML risk estimation, fact verification, \
     and local LLM commonsense reasoning.";
const COMMONSENSE_NOTE: &str = "Commonsense reasoning applied via local LLM.";

/// Accumulator threaded through the pipeline stages. Makes the override
/// precedence auditable and each stage independently testable.
#[derive(Debug, Clone)]
struct AuditState {
    kind: StatementKind,
    bias_detected: bool,
    bias_type: BiasType,
    truth_status: TruthStatus,
    sources: Vec<Evidence>,
    hallucination_detected: bool,
    hallucination_type: HallucinationType,
    corrected_statement: Option<String>,
    commonsense_applied: bool,
}

impl AuditState {
    fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            bias_detected: false,
            bias_type: BiasType::None,
            truth_status: TruthStatus::Unverifiable,
            sources: Vec::new(),
            hallucination_detected: false,
            hallucination_type: HallucinationType::None,
            corrected_statement: None,
            commonsense_applied: false,
        }
    }
}

/// Combine the ML bias flag with the rule-based backstop. The rule
/// detector's category takes priority when it fires.
fn combine_bias(ml: &RiskAssessment, rule_flag: bool, rule_type: BiasType) -> (bool, BiasType) {
    let detected = ml.bias_flag || rule_flag;
    let bias_type = if rule_flag {
        rule_type
    } else if ml.bias_flag {
        ml.bias_type
    } else {
        BiasType::None
    };
    (detected, bias_type)
}

/// Derive the hallucination decision from the settled truth status. For
/// ambiguous statuses the ML signal decides.
fn derive_hallucination(
    truth_status: TruthStatus,
    ml: &RiskAssessment,
) -> (bool, HallucinationType) {
    match truth_status {
        TruthStatus::True => (false, HallucinationType::None),
        TruthStatus::False => (true, HallucinationType::Factual),
        TruthStatus::Misleading => (true, HallucinationType::Logical),
        TruthStatus::PartiallyTrue | TruthStatus::Unverifiable | TruthStatus::NotApplicable => {
            if ml.hallucination_flag {
                (true, ml.hallucination_type)
            } else {
                (false, HallucinationType::None)
            }
        }
    }
}

/// Apply the commonsense judgment to the accumulated state.
///
/// A `false` or `misleading` verdict overrides the truth status and takes
/// the engine's corrected statement; `true` and `unverifiable` change
/// nothing (a settled `False` upstream is trusted over the fallback
/// engine, which is why the gate never fires for it). The bias opinion is
/// applied independently and wins over earlier bias signals.
fn apply_judgment(state: &mut AuditState, judgment: &Judgment) {
    match judgment.verdict {
        JudgmentVerdict::False => {
            state.truth_status = TruthStatus::False;
            state.hallucination_detected = true;
            state.hallucination_type = HallucinationType::Factual;
            state.corrected_statement = Some(judgment.corrected_statement.clone());
        }
        JudgmentVerdict::Misleading => {
            state.truth_status = TruthStatus::Misleading;
            state.hallucination_detected = true;
            state.hallucination_type = HallucinationType::Logical;
            state.corrected_statement = Some(judgment.corrected_statement.clone());
        }
        JudgmentVerdict::True | JudgmentVerdict::Unverifiable => {}
    }

    if judgment.bias {
        state.bias_detected = true;
        state.bias_type = judgment.bias_type;
        state.hallucination_detected = true;
        state.hallucination_type = HallucinationType::Bias;
    }

    state.commonsense_applied = true;
}

/// Final correction text for states the commonsense engine did not
/// correct. Bias takes priority over hallucination takes priority over
/// the no-op notice.
fn correction_text(state: &AuditState) -> String {
    if state.bias_detected {
        return BIAS_CORRECTION.to_string();
    }
    if state.hallucination_detected {
        return state
            .sources
            .first()
            .map(|evidence| evidence.text.clone())
            .unwrap_or_else(|| UNVERIFIABLE_CORRECTION.to_string());
    }
    NO_CORRECTION.to_string()
}

fn explanation(state: &AuditState) -> String {
    let mut text = format!(
        "Statement type: {}. Truth status: {}. Bias detected: {}. \
         Hallucination detected: {}. {}",
        state.kind,
        state.truth_status,
        state.bias_detected,
        state.hallucination_detected,
        METHODOLOGY_NOTE
    );
    if state.commonsense_applied {
        text.push(' ');
        text.push_str(COMMONSENSE_NOTE);
    }
    text
}

/// The decision orchestrator.
///
/// Holds the four injected collaborators; all of them are shared,
/// read-only and safe to use from concurrent requests. Each call to
/// [`Auditor::audit`] is independent and strictly sequential internally.
pub struct Auditor {
    risk: Arc<dyn RiskEstimator>,
    summaries: Arc<dyn SummaryProvider>,
    verifier: ClaimVerifier,
    reasoner: Arc<dyn CommonsenseReasoner>,
}

impl Auditor {
    pub fn new(
        risk: Arc<dyn RiskEstimator>,
        capitals: Arc<dyn CapitalProvider>,
        summaries: Arc<dyn SummaryProvider>,
        reasoner: Arc<dyn CommonsenseReasoner>,
    ) -> Self {
        Self {
            risk,
            summaries: summaries.clone(),
            verifier: ClaimVerifier::new(capitals, summaries),
            reasoner,
        }
    }

    /// Audit one statement and produce the final verdict.
    pub async fn audit(&self, input: &str) -> Verdict {
        // Stage 1: classify and early-exit for non-auditable inputs.
        let kind = classify_statement(input);
        debug!(%kind, "statement classified");

        if matches!(kind, StatementKind::Question | StatementKind::OpinionRequest) {
            return Verdict {
                input_statement: input.to_string(),
                hallucination_detected: false,
                hallucination_type: HallucinationType::None,
                bias_detected: false,
                bias_type: BiasType::None,
                truth_status: TruthStatus::NotApplicable,
                corrected_statement: NO_CORRECTION.to_string(),
                sources: Vec::new(),
                explanation: format!("Statement type: {}. {}", kind, NOT_APPLICABLE_NOTE),
            };
        }

        let mut state = AuditState::new(kind);

        // Stage 2: normalize.
        let claim = normalize_claim(input);

        // Stage 3: risk estimation plus the rule-based bias backstop.
        let assessment = self.risk.assess(input);
        let (rule_flag, rule_type) = rule_based_bias_check(input);
        let (bias_detected, bias_type) = combine_bias(&assessment, rule_flag, rule_type);
        state.bias_detected = bias_detected;
        state.bias_type = bias_type;

        // Stage 4: fact verification.
        let (truth_status, sources) = self.verify_claim(input, &claim).await;
        state.truth_status = truth_status;
        state.sources = sources;
        debug!(status = %state.truth_status, sources = state.sources.len(), "claim verified");

        // Stage 5: contradiction override; can demote True to False.
        if let Some(evidence) = state.sources.first() {
            if check_contradiction(input, &evidence.text) {
                debug!("evidence contradicts statement, forcing False");
                state.truth_status = TruthStatus::False;
            }
        }

        // Stage 6: hallucination derivation.
        let (detected, hallucination_type) = derive_hallucination(state.truth_status, &assessment);
        state.hallucination_detected = detected;
        state.hallucination_type = hallucination_type;

        // Stage 7: commonsense gate. Only residual ambiguity with a live
        // hallucination signal reaches the fallback engine.
        let ambiguous = matches!(
            state.truth_status,
            TruthStatus::Unverifiable | TruthStatus::PartiallyTrue
        );
        if ambiguous && state.hallucination_detected {
            let judgment = self.reasoner.judge(input).await;
            debug!(verdict = ?judgment.verdict, bias = judgment.bias, "commonsense judgment");
            apply_judgment(&mut state, &judgment);
        }

        // Stages 8-9: correction text and explanation.
        let corrected_statement = state
            .corrected_statement
            .clone()
            .unwrap_or_else(|| correction_text(&state));
        let explanation = explanation(&state);

        Verdict {
            input_statement: input.to_string(),
            hallucination_detected: state.hallucination_detected,
            hallucination_type: state.hallucination_type,
            bias_detected: state.bias_detected,
            bias_type: state.bias_type,
            truth_status: state.truth_status,
            corrected_statement,
            sources: state.sources,
            explanation,
        }
    }

    async fn verify_claim(&self, input: &str, claim: &Claim) -> (TruthStatus, Vec<Evidence>) {
        if claim.is_structured() {
            self.verifier.verify(claim).await
        } else {
            match self.summaries.lookup_summary(input).await {
                Some(evidence) => (TruthStatus::PartiallyTrue, vec![evidence]),
                None => (TruthStatus::Unverifiable, Vec::new()),
            }
        }
    }
}
