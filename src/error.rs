//! Error types for factaudit.
//!
//! The audit pipeline itself never surfaces these to the caller: every
//! external call site collapses failure into its documented fail-safe
//! value. They exist for collaborator internals and for contract
//! violations that should abort startup rather than degrade per-request.

use thiserror::Error;

/// Result type alias using factaudit's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur inside collaborators of the audit pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Evidence provider request failed
    #[error("Evidence provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    /// Commonsense reasoner invocation failed
    #[error("Reasoner error: {0}")]
    Reasoner(String),

    /// Subprocess communication error
    #[error("Subprocess communication error: {0}")]
    SubprocessComm(String),

    /// Timeout during operation
    #[error("Operation timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an evidence-provider error.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(duration_ms: u64) -> Self {
        Self::Timeout { duration_ms }
    }
}
