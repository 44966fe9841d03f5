//! # factaudit
//!
//! A fact and bias audit orchestration library for short declarative
//! statements. One call takes a natural-language statement and produces a
//! [`Verdict`]: whether the statement is truthful, hallucinated or biased,
//! together with a corrected statement and a human-readable explanation.
//!
//! ## Core Components
//!
//! - **Statement**: statement-kind classification (question, comparative,
//!   hard fact, ...)
//! - **Claim**: relation extraction into subject/relation/object triples
//! - **Evidence**: structured (Wikidata) and free-text (Wikipedia)
//!   providers, both fail-open
//! - **Reasoner**: commonsense fallback engine for residual ambiguity
//! - **Auditor**: the decision orchestrator resolving all signals under a
//!   strict precedence order
//!
//! ## Example
//!
//! ```rust,ignore
//! use factaudit::{
//!     Auditor, OllamaReasoner, ProviderConfig, ReasonerConfig, StaticRiskEstimator,
//!     WikidataCapitalProvider, WikipediaSummaryProvider,
//! };
//! use std::sync::Arc;
//!
//! let auditor = Auditor::new(
//!     Arc::new(StaticRiskEstimator::silent()),
//!     Arc::new(WikidataCapitalProvider::new(ProviderConfig::default())),
//!     Arc::new(WikipediaSummaryProvider::new(ProviderConfig::default())),
//!     Arc::new(OllamaReasoner::new(ReasonerConfig::default())),
//! );
//!
//! let verdict = auditor.audit("Delhi is the capital of India").await;
//! println!("{}: {}", verdict.truth_status, verdict.explanation);
//! ```

pub mod bias;
pub mod claim;
pub mod contradiction;
pub mod error;
pub mod evidence;
pub mod orchestrator;
pub mod reasoner;
pub mod risk;
pub mod statement;
pub mod verdict;
pub mod verify;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use bias::{rule_based_bias_check, BIAS_PATTERNS};
pub use claim::{normalize_claim, Claim, ClaimKind, Relation};
pub use contradiction::check_contradiction;
pub use error::{Error, Result};
pub use evidence::{
    CapitalProvider, Evidence, ProviderConfig, SummaryProvider, WikidataCapitalProvider,
    WikipediaSummaryProvider,
};
pub use orchestrator::Auditor;
pub use reasoner::{
    CommonsenseReasoner, Judgment, JudgmentVerdict, OllamaReasoner, ReasonerConfig,
};
pub use risk::{RiskAssessment, RiskEstimator, StaticRiskEstimator};
pub use statement::{classify_statement, StatementKind, OPINION_REQUEST_PHRASES, QUESTION_STARTERS};
pub use verdict::{BiasType, HallucinationType, TruthStatus, Verdict};
pub use verify::ClaimVerifier;
