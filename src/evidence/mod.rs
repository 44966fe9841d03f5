//! Evidence records and provider contracts.
//!
//! Two kinds of provider feed the verifier: a structured knowledge source
//! that resolves a country to its capital, and a free-text source that
//! returns a short encyclopedic summary for a query. Both fail open: any
//! network, parse or shape error resolves to `None`, never to an error the
//! orchestrator can observe.

pub mod wikidata;
pub mod wikipedia;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use wikidata::WikidataCapitalProvider;
pub use wikipedia::WikipediaSummaryProvider;

/// An excerpt retrieved from an evidence provider, with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// The excerpt text
    pub text: String,
    /// Name of the provider the excerpt came from
    pub source: String,
    /// Link to the underlying page, when the provider has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Evidence {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Structured knowledge lookup: country name to capital name.
#[async_trait]
pub trait CapitalProvider: Send + Sync {
    /// Resolve the capital of a country. `None` covers both "unknown" and
    /// any provider failure.
    async fn lookup_capital(&self, country: &str) -> Option<String>;
}

/// Free-text encyclopedic summary lookup.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Fetch a short summary for a query. `None` covers both "no page"
    /// and any provider failure.
    async fn lookup_summary(&self, query: &str) -> Option<Evidence>;
}

/// Shared configuration for the HTTP evidence providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("factaudit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ProviderConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// Providers are constructed once at startup; a client that cannot be
// built is a startup error, not a per-request one.
pub(crate) fn build_http_client(config: &ProviderConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .expect("failed to build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_serializes_without_null_url() {
        let evidence = Evidence::new("Delhi is the capital of India.", "Wikipedia");
        let json = serde_json::to_string(&evidence).unwrap();
        assert!(!json.contains("url"));

        let with_url = evidence.with_url("https://en.wikipedia.org/wiki/Delhi");
        let json = serde_json::to_string(&with_url).unwrap();
        assert!(json.contains("https://en.wikipedia.org/wiki/Delhi"));
    }

    #[test]
    fn test_provider_config_builder() {
        let config = ProviderConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent");
    }
}
