//! Commonsense reasoning fallback.
//!
//! Invoked only when upstream signals leave a claim ambiguous. The
//! contract is that a reasoner never fails outward: unreachable engine,
//! exceeded timeout or a malformed response all resolve to the fixed
//! neutral [`Judgment::fallback`], so the orchestrator sees a well-formed
//! judgment on every path.

pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::verdict::BiasType;

pub use ollama::{OllamaReasoner, ReasonerConfig};

/// The reasoner's overall call on a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JudgmentVerdict {
    True,
    False,
    Misleading,
    Unverifiable,
}

impl Default for JudgmentVerdict {
    fn default() -> Self {
        Self::Unverifiable
    }
}

/// Structured judgment returned by the commonsense engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    pub verdict: JudgmentVerdict,
    pub reasoning: String,
    pub corrected_statement: String,
    /// Whether the engine saw a biased generalization
    pub bias: bool,
    pub bias_type: BiasType,
}

impl Judgment {
    /// The fixed safe default used whenever the engine is unavailable or
    /// its response cannot be parsed.
    pub fn fallback(statement: &str) -> Self {
        Self {
            verdict: JudgmentVerdict::Unverifiable,
            reasoning: "Commonsense engine unavailable or response malformed.".to_string(),
            corrected_statement: statement.to_string(),
            bias: false,
            bias_type: BiasType::None,
        }
    }

    /// Enforce the bias consistency rule: without a positive bias call,
    /// the bias type is forced to `none` regardless of what the engine
    /// returned.
    pub fn normalized(mut self) -> Self {
        if !self.bias {
            self.bias_type = BiasType::None;
        }
        self
    }
}

/// Judgment engine invoked under residual ambiguity.
#[async_trait]
pub trait CommonsenseReasoner: Send + Sync {
    /// Judge a statement. Must always return; failures collapse to
    /// [`Judgment::fallback`].
    async fn judge(&self, statement: &str) -> Judgment;
}
