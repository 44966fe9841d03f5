//! Machine-learned risk signals.
//!
//! The risk estimator is an external collaborator: four independent
//! classifiers over a shared feature vectorizer, loaded once at process
//! start and read-only for the lifetime of the process. Training,
//! persistence and loading live outside this crate; here we specify only
//! the prediction contract and a deterministic stub for wiring and tests.

use serde::{Deserialize, Serialize};

use crate::verdict::{BiasType, HallucinationType};

/// The four predictions the ML layer produces for one statement.
///
/// The type fields are only meaningful when their flag is set; callers
/// must treat them as `None`/`none` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub hallucination_flag: bool,
    pub hallucination_type: HallucinationType,
    pub bias_flag: bool,
    pub bias_type: BiasType,
}

impl RiskAssessment {
    /// An assessment with every signal off.
    pub fn clear() -> Self {
        Self {
            hallucination_flag: false,
            hallucination_type: HallucinationType::None,
            bias_flag: false,
            bias_type: BiasType::None,
        }
    }
}

impl Default for RiskAssessment {
    fn default() -> Self {
        Self::clear()
    }
}

/// Black-box prediction interface over the loaded model artifacts.
///
/// Implementations must be deterministic for fixed artifacts and must not
/// fail once constructed: a model that cannot be loaded is a startup
/// error, not a per-request one.
pub trait RiskEstimator: Send + Sync {
    /// Predict risk signals for one statement.
    fn assess(&self, statement: &str) -> RiskAssessment;
}

/// Estimator that returns the same assessment for every statement.
///
/// Used to wire the pipeline when no trained model is available, and in
/// tests to script the ML layer.
#[derive(Debug, Clone)]
pub struct StaticRiskEstimator {
    assessment: RiskAssessment,
}

impl StaticRiskEstimator {
    pub fn new(assessment: RiskAssessment) -> Self {
        Self { assessment }
    }

    /// An estimator that never flags anything.
    pub fn silent() -> Self {
        Self::new(RiskAssessment::clear())
    }
}

impl RiskEstimator for StaticRiskEstimator {
    fn assess(&self, _statement: &str) -> RiskAssessment {
        self.assessment
    }
}
