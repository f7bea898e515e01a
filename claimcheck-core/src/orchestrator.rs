//! The verification orchestrator.
//!
//! Sequences one search call, the heuristic, one LLM call, classification and
//! fusion for a single claim. `verify` never fails: blank claims short-circuit
//! before any provider is touched, and every error along the pipeline becomes
//! a zeroed `Error` result. Nothing is shared between calls.

use std::sync::Arc;

use log::{error, info};
use uuid::Uuid;

use crate::aggregator::EvidenceAggregator;
use crate::classifier::LlmVerdictClassifier;
use crate::clock::{Clock, SystemClock};
use crate::config::ClaimCheckConfig;
use crate::errors::{ClaimCheckError, Result};
use crate::fusion::fuse;
use crate::prompt::build_prompt;
use crate::providers::{ReasoningProvider, SearchProvider};
use crate::scorer::SourceScorer;
use crate::verdict::VerificationResult;

pub struct Verifier {
    search: Box<dyn SearchProvider>,
    reasoning: Box<dyn ReasoningProvider>,
    aggregator: EvidenceAggregator,
    classifier: LlmVerdictClassifier,
    num_results: usize,
    max_prompt_evidence: usize,
}

impl Verifier {
    pub fn new(
        config: &ClaimCheckConfig,
        search: Box<dyn SearchProvider>,
        reasoning: Box<dyn ReasoningProvider>,
    ) -> Result<Self> {
        Self::with_clock(config, search, reasoning, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: &ClaimCheckConfig,
        search: Box<dyn SearchProvider>,
        reasoning: Box<dyn ReasoningProvider>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        Ok(Self {
            search,
            reasoning,
            aggregator: EvidenceAggregator::new(SourceScorer::with_clock(&config.scoring, clock)?),
            classifier: LlmVerdictClassifier::new(&config.classifier)?,
            num_results: config.search.num_results,
            max_prompt_evidence: config.reasoning.max_prompt_evidence,
        })
    }

    /// Verifies one claim. Always returns a result; the claim is echoed as given.
    pub fn verify(&self, claim: &str) -> VerificationResult {
        let request_id = Uuid::new_v4();

        match self.run(claim, &request_id) {
            Ok(result) => {
                info!(
                    "[{}] Verdict: {} (score {}, confidence {}).",
                    request_id, result.verdict, result.credibility_score, result.confidence
                );
                result
            }
            Err(ClaimCheckError::EmptyInput) => {
                info!("[{}] Empty claim; skipping verification.", request_id);
                VerificationResult::empty_input()
            }
            Err(e) => {
                error!("[{}] Verification failed: {}", request_id, e);
                VerificationResult::error(claim, e)
            }
        }
    }

    fn run(&self, claim: &str, request_id: &Uuid) -> Result<VerificationResult> {
        if claim.trim().is_empty() {
            return Err(ClaimCheckError::EmptyInput);
        }
        info!("[{}] Verifying claim ({} chars).", request_id, claim.len());

        let evidence = self.search.search(claim, self.num_results)?;
        info!("[{}] {} returned {} evidence records.", request_id, self.search.name(), evidence.len());

        let heuristic = self.aggregator.aggregate(claim, &evidence);

        let prompt = build_prompt(claim, &evidence, self.max_prompt_evidence)?;
        let text = self.reasoning.generate(&prompt)?;
        let llm = self.classifier.to_result(text.trim().to_string());
        info!(
            "[{}] Heuristic {} ({}), {} says {}.",
            request_id,
            heuristic.label(),
            heuristic.score,
            self.reasoning.name(),
            llm.verdict
        );

        let fused = fuse(&heuristic, &llm);

        Ok(VerificationResult {
            claim: claim.to_string(),
            credibility_score: fused.score,
            verdict: fused.verdict,
            confidence: fused.confidence,
            rationale: llm.explanation,
            top_sources: heuristic.top_sources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::evidence::EvidenceRecord;
    use crate::verdict::{Confidence, Verdict};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSearch {
        results: Vec<EvidenceRecord>,
        calls: Arc<AtomicUsize>,
    }

    impl SearchProvider for StaticSearch {
        fn name(&self) -> &str { "static" }
        fn search(&self, _: &str, _: usize) -> Result<Vec<EvidenceRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.results.clone())
        }
    }

    struct StaticModel {
        reply: std::result::Result<String, String>,
        calls: Arc<AtomicUsize>,
    }

    impl ReasoningProvider for StaticModel {
        fn name(&self) -> &str { "static-model" }
        fn generate(&self, _: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(|m| ClaimCheckError::provider("static-model", m))
        }
    }

    fn verifier(
        results: Vec<EvidenceRecord>,
        reply: std::result::Result<String, String>,
    ) -> (Verifier, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let config = ClaimCheckConfig::load_default().unwrap();
        let search_calls = Arc::new(AtomicUsize::new(0));
        let model_calls = Arc::new(AtomicUsize::new(0));
        let verifier = Verifier::with_clock(
            &config,
            Box::new(StaticSearch { results, calls: search_calls.clone() }),
            Box::new(StaticModel { reply, calls: model_calls.clone() }),
            Arc::new(FixedClock(2025)),
        )
        .unwrap();
        (verifier, search_calls, model_calls)
    }

    #[test]
    fn test_blank_claim_never_calls_providers() {
        let (v, search_calls, model_calls) = verifier(Vec::new(), Ok("true".into()));
        for claim in ["", "   ", "\n\t"] {
            let result = v.verify(claim);
            assert_eq!(result.verdict, Verdict::EmptyInput);
            assert_eq!(result.credibility_score, 0);
            assert_eq!(result.confidence, Confidence::Low);
            assert!(result.top_sources.is_empty());
        }
        assert_eq!(search_calls.load(Ordering::SeqCst), 0);
        assert_eq!(model_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_provider_failure_becomes_error_result() {
        let (v, _, _) = verifier(Vec::new(), Err("quota exceeded".into()));
        let result = v.verify("The sky is green");
        assert_eq!(result.verdict, Verdict::Error);
        assert_eq!(result.claim, "The sky is green");
        assert_eq!(result.credibility_score, 0);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.rationale.starts_with("An error occurred during verification: "));
        assert!(result.rationale.contains("quota exceeded"));
    }

    #[test]
    fn test_rationale_is_trimmed_model_text() {
        let (v, _, model_calls) = verifier(Vec::new(), Ok("  The evidence is unclear.  \n".into()));
        let result = v.verify("  The sky is green ");
        assert_eq!(result.claim, "  The sky is green ");
        assert_eq!(result.rationale, "The evidence is unclear.");
        assert_eq!(model_calls.load(Ordering::SeqCst), 1);
    }
}
