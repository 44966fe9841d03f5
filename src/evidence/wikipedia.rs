//! Wikipedia summary lookup.
//!
//! Fetches the lead summary for a page title via the REST summary
//! endpoint and truncates it to the first couple of sentences. Fails open
//! to `None` on any HTTP, parse or missing-page condition.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{build_http_client, Evidence, ProviderConfig, SummaryProvider};

const SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Free-text summaries backed by the public Wikipedia REST API.
pub struct WikipediaSummaryProvider {
    http: reqwest::Client,
    endpoint: String,
    /// Number of leading sentences kept from the page summary
    sentences: usize,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrl>,
}

#[derive(Debug, Deserialize)]
struct PageUrl {
    page: Option<String>,
}

/// Keep the first `n` sentences of a summary, splitting on ". ".
fn truncate_sentences(text: &str, n: usize) -> String {
    text.split(". ").take(n).collect::<Vec<_>>().join(". ")
}

impl WikipediaSummaryProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: build_http_client(&config),
            endpoint: SUMMARY_ENDPOINT.to_string(),
            sentences: 2,
        }
    }

    /// Point the provider at a different endpoint (used in tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_sentences(mut self, sentences: usize) -> Self {
        self.sentences = sentences.max(1);
        self
    }
}

#[async_trait]
impl SummaryProvider for WikipediaSummaryProvider {
    async fn lookup_summary(&self, query: &str) -> Option<Evidence> {
        let title = query.trim().replace(' ', "_");
        if title.is_empty() {
            return None;
        }

        let url = format!("{}/{}", self.endpoint, title);
        let response = self.http.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            debug!(query, status = %response.status(), "wikipedia page not found");
            return None;
        }

        let body: SummaryResponse = response.json().await.ok()?;
        let extract = body.extract?;
        if extract.is_empty() {
            return None;
        }

        let mut evidence = Evidence::new(truncate_sentences(&extract, self.sentences), "Wikipedia");
        if let Some(page) = body
            .content_urls
            .and_then(|urls| urls.desktop)
            .and_then(|desktop| desktop.page)
        {
            evidence = evidence.with_url(page);
        }

        Some(evidence)
    }
}
