//! The evidence aggregator: scores every retrieved record and reduces them to
//! one heuristic score and verdict.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use claimcheck_signals::statistics::{mean, round_to_hundredths, to_percent};

use crate::evidence::{EvidenceRecord, ScoredEvidence};
use crate::scorer::SourceScorer;
use crate::verdict::{HeuristicResult, Verdict};

/// Inclusive lower bound of the `LikelyTrue` band.
pub const LIKELY_TRUE_THRESHOLD: u8 = 70;
/// Inclusive upper bound of the `LikelyFalse` band.
pub const LIKELY_FALSE_THRESHOLD: u8 = 35;
/// Subtracted from the mean when a fact-check source and falsity language co-occur.
pub const DEBUNK_PENALTY: f64 = 0.5;
/// Number of sources kept for display.
pub const TOP_SOURCES: usize = 5;

/// Maps an aggregate score onto the heuristic verdict bands.
pub fn verdict_for_score(score: u8) -> Verdict {
    if score >= LIKELY_TRUE_THRESHOLD {
        Verdict::LikelyTrue
    } else if score <= LIKELY_FALSE_THRESHOLD {
        Verdict::LikelyFalse
    } else {
        Verdict::Uncertain
    }
}

#[derive(Debug, Clone)]
pub struct EvidenceAggregator {
    scorer: SourceScorer,
}

impl EvidenceAggregator {
    pub fn new(scorer: SourceScorer) -> Self {
        Self { scorer }
    }

    pub fn aggregate(&self, claim: &str, evidence: &[EvidenceRecord]) -> HeuristicResult {
        if evidence.is_empty() {
            info!("No evidence retrieved; heuristic is insufficient.");
            return HeuristicResult::insufficient();
        }

        let mut scores = Vec::with_capacity(evidence.len());
        let mut scored = Vec::with_capacity(evidence.len());
        let mut factcheck_flag = false;
        let mut false_flag = false;

        for record in evidence {
            let source_score = self.scorer.score(claim, record);
            debug!(
                "Scored '{}': domain={:.2} recency={:.2} relevance={:.2} composite={:.3} factcheck={} falsity={}",
                record.link,
                source_score.signals.domain_quality,
                source_score.signals.recency,
                source_score.signals.relevance,
                source_score.composite,
                source_score.factcheck,
                source_score.falsity,
            );

            factcheck_flag |= source_score.factcheck;
            false_flag |= source_score.falsity;

            scores.push(source_score.composite);
            scored.push(ScoredEvidence {
                record: record.clone(),
                score: round_to_hundredths(source_score.composite * 100.0),
            });
        }

        let mut average = mean(&scores);
        if factcheck_flag && false_flag {
            debug!("Fact-check source and falsity language both present; applying debunk penalty.");
            average = (average - DEBUNK_PENALTY).max(0.0);
        }

        let score = to_percent(average);
        let verdict = verdict_for_score(score);
        scored.truncate(TOP_SOURCES);

        info!(
            "Heuristic over {} sources: score={} verdict={}",
            evidence.len(),
            score,
            verdict
        );

        HeuristicResult {
            score,
            verdict,
            insufficient_evidence: false,
            top_sources: scored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::ClaimCheckConfig;
    use crate::scorer::SourceScorer;
    use std::sync::Arc;

    fn aggregator() -> EvidenceAggregator {
        let config = ClaimCheckConfig::load_default().unwrap();
        EvidenceAggregator::new(SourceScorer::with_clock(&config.scoring, Arc::new(FixedClock(2025))).unwrap())
    }

    fn record(link: &str, snippet: &str) -> EvidenceRecord {
        EvidenceRecord::new("", link, snippet, "", "")
    }

    #[test]
    fn test_empty_evidence_is_insufficient() {
        let result = aggregator().aggregate("anything", &[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, Verdict::Uncertain);
        assert!(result.insufficient_evidence);
        assert!(result.top_sources.is_empty());
    }

    #[test]
    fn test_verdict_thresholds_are_inclusive_and_asymmetric() {
        assert_eq!(verdict_for_score(70), Verdict::LikelyTrue);
        assert_eq!(verdict_for_score(69), Verdict::Uncertain);
        assert_eq!(verdict_for_score(50), Verdict::Uncertain);
        assert_eq!(verdict_for_score(36), Verdict::Uncertain);
        assert_eq!(verdict_for_score(35), Verdict::LikelyFalse);
        assert_eq!(verdict_for_score(0), Verdict::LikelyFalse);
    }

    #[test]
    fn test_debunk_penalty_needs_both_flags() {
        let agg = aggregator();
        let claim = "moon cheese";
        // Fact-check domain, neutral snippet: 0.4 + 0.12 + 0 + 0.3 = 0.82
        let factcheck = record("https://www.snopes.com/fact-check/moon", "an investigation");
        // Ordinary domain, falsity snippet: 0.24 + 0.12 + 0 = 0.36
        let falsity = record("https://blog.example.com/post", "this is false");
        // Ordinary domain, neutral snippet: 0.36
        let neutral = record("https://blog.example.com/other", "an essay");

        let both = agg.aggregate(claim, &[factcheck.clone(), falsity.clone()]);
        // mean 0.59 - 0.5 = 0.09
        assert_eq!(both.score, 9);
        assert_eq!(both.verdict, Verdict::LikelyFalse);

        let without_falsity = agg.aggregate(claim, &[factcheck, neutral.clone()]);
        assert_eq!(without_falsity.score, 59);
        assert_eq!(without_falsity.verdict, Verdict::Uncertain);

        let without_factcheck = agg.aggregate(claim, &[falsity, neutral]);
        assert_eq!(without_factcheck.score, 36);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let agg = aggregator();
        let records = vec![
            record("https://www.snopes.com/x", "false"),
            record("https://blog.example.com/a", "nothing"),
            record("https://blog.example.com/b", "nothing"),
            record("https://blog.example.com/c", "nothing"),
        ];
        // mean (0.82 + 3 * 0.36) / 4 = 0.475 -> penalty leaves 0
        let result = agg.aggregate("unrelated", &records);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_top_sources_keep_retrieval_order_and_truncate() {
        let agg = aggregator();
        let records: Vec<EvidenceRecord> = (0..7)
            .map(|i| {
                let link = if i == 3 {
                    "https://www.bbc.com/news".to_string()
                } else {
                    format!("https://site{}.example.com", i)
                };
                EvidenceRecord::new(format!("t{}", i), link, "", "", "")
            })
            .collect();

        let result = agg.aggregate("claim", &records);
        assert_eq!(result.top_sources.len(), TOP_SOURCES);
        let titles: Vec<&str> = result.top_sources.iter().map(|s| s.record.title.as_str()).collect();
        assert_eq!(titles, vec!["t0", "t1", "t2", "t3", "t4"]);
        // bbc.com stays in place even though it outscores its neighbours
        assert!(result.top_sources[3].score > result.top_sources[2].score);
    }

    #[test]
    fn test_source_scores_are_percentages_with_two_decimals() {
        let agg = aggregator();
        let result = agg.aggregate("claim", &[record("https://blog.example.com", "")]);
        assert_eq!(result.top_sources[0].score, 36.0);
        assert_eq!(result.score, 36);
    }
}
