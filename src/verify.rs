//! Structured claim verification.
//!
//! Composes the structured knowledge source (primary) with the free-text
//! summary source (fallback) to settle a structured claim. Provider
//! failures are indistinguishable from "no result" here; the verifier
//! itself can therefore never fail, only degrade to `Unverifiable`.

use std::sync::Arc;
use tracing::debug;

use crate::claim::{Claim, Relation};
use crate::evidence::{CapitalProvider, Evidence, SummaryProvider};
use crate::verdict::TruthStatus;

/// Verifies structured claims against the evidence providers.
pub struct ClaimVerifier {
    capitals: Arc<dyn CapitalProvider>,
    summaries: Arc<dyn SummaryProvider>,
}

impl ClaimVerifier {
    pub fn new(capitals: Arc<dyn CapitalProvider>, summaries: Arc<dyn SummaryProvider>) -> Self {
        Self { capitals, summaries }
    }

    /// Settle a structured claim. Returns the truth status plus at most
    /// one evidence item; downstream stages only ever use the first.
    pub async fn verify(&self, claim: &Claim) -> (TruthStatus, Vec<Evidence>) {
        match claim.relation {
            Relation::CapitalOf => self.verify_capital(claim).await,
            Relation::Count => self.verify_count(claim).await,
            _ => self.verify_fallback(claim).await,
        }
    }

    async fn verify_capital(&self, claim: &Claim) -> (TruthStatus, Vec<Evidence>) {
        let object = claim.object.as_deref().unwrap_or_default();

        if let Some(capital) = self.capitals.lookup_capital(object).await {
            if capital.eq_ignore_ascii_case(&claim.subject) {
                // Corroborating excerpt is optional; the structured match
                // alone settles the claim.
                let wiki = self
                    .summaries
                    .lookup_summary(&format!("Capital of {}", object))
                    .await;
                return (TruthStatus::True, wiki.into_iter().collect());
            }

            debug!(subject = %claim.subject, %capital, "capital mismatch");
            let wiki = self.summaries.lookup_summary(&claim.subject).await;
            return (TruthStatus::False, wiki.into_iter().collect());
        }

        // Primary source had nothing; settle from the free-text summary.
        match self
            .summaries
            .lookup_summary(&format!("Capital of {}", object))
            .await
        {
            Some(wiki) => {
                let subject = claim.subject.to_lowercase();
                let status = if wiki.text.to_lowercase().contains(&subject) {
                    TruthStatus::True
                } else {
                    TruthStatus::False
                };
                (status, vec![wiki])
            }
            None => (TruthStatus::Unverifiable, Vec::new()),
        }
    }

    async fn verify_count(&self, claim: &Claim) -> (TruthStatus, Vec<Evidence>) {
        match self.summaries.lookup_summary(&self.claim_query(claim)).await {
            Some(wiki) => {
                let value = claim.value.map(|v| v.to_string()).unwrap_or_default();
                let status = if !value.is_empty() && wiki.text.contains(&value) {
                    TruthStatus::True
                } else {
                    TruthStatus::False
                };
                (status, vec![wiki])
            }
            None => (TruthStatus::Unverifiable, Vec::new()),
        }
    }

    async fn verify_fallback(&self, claim: &Claim) -> (TruthStatus, Vec<Evidence>) {
        match self.summaries.lookup_summary(&self.claim_query(claim)).await {
            Some(wiki) => (TruthStatus::PartiallyTrue, vec![wiki]),
            None => (TruthStatus::Unverifiable, Vec::new()),
        }
    }

    fn claim_query(&self, claim: &Claim) -> String {
        format!(
            "{} {}",
            claim.subject,
            claim.object.as_deref().unwrap_or_default()
        )
    }
}
