//! Deterministic collaborator stubs shared by unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::evidence::{CapitalProvider, Evidence, SummaryProvider};
use crate::reasoner::{CommonsenseReasoner, Judgment};

/// Capital lookups scripted as a country → capital map.
#[derive(Debug, Default)]
pub struct StubCapitalProvider {
    capitals: HashMap<String, String>,
}

impl StubCapitalProvider {
    /// A provider that knows nothing (simulates an unavailable source).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_capital(country: &str, capital: &str) -> Self {
        let mut stub = Self::default();
        stub.add(country, capital);
        stub
    }

    pub fn add(&mut self, country: &str, capital: &str) {
        self.capitals
            .insert(country.to_lowercase(), capital.to_string());
    }
}

#[async_trait]
impl CapitalProvider for StubCapitalProvider {
    async fn lookup_capital(&self, country: &str) -> Option<String> {
        self.capitals.get(&country.to_lowercase()).cloned()
    }
}

/// Summary lookups scripted as a query → evidence map.
#[derive(Debug, Default)]
pub struct StubSummaryProvider {
    summaries: HashMap<String, Evidence>,
    calls: AtomicUsize,
}

impl StubSummaryProvider {
    /// A provider that finds nothing (simulates an unavailable source).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_summary(query: &str, evidence: Evidence) -> Self {
        let mut stub = Self::default();
        stub.add(query, evidence);
        stub
    }

    pub fn add(&mut self, query: &str, evidence: Evidence) {
        self.summaries.insert(query.to_lowercase(), evidence);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryProvider for StubSummaryProvider {
    async fn lookup_summary(&self, query: &str) -> Option<Evidence> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.summaries.get(&query.to_lowercase()).cloned()
    }
}

/// Reasoner that returns a scripted judgment (or the safe fallback when
/// none is scripted) and counts invocations so tests can assert on the
/// commonsense gate.
pub struct StubReasoner {
    judgment: Option<Judgment>,
    calls: AtomicUsize,
}

impl StubReasoner {
    /// Simulates an unavailable engine: every call yields the fallback.
    pub fn unavailable() -> Self {
        Self {
            judgment: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(judgment: Judgment) -> Self {
        Self {
            judgment: Some(judgment),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommonsenseReasoner for StubReasoner {
    async fn judge(&self, statement: &str) -> Judgment {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.judgment {
            Some(judgment) => judgment.clone().normalized(),
            None => Judgment::fallback(statement),
        }
    }
}
