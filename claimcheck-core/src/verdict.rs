//! Verdict, confidence and the result types that flow between the scoring
//! stages and out to the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::evidence::ScoredEvidence;

/// Coarse credibility verdict.
///
/// Only the first three variants are produced by the heuristic and the LLM
/// classifier; `Error` and `EmptyInput` exist for the orchestrator's terminal
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Likely True")]
    LikelyTrue,
    #[serde(rename = "Likely False")]
    LikelyFalse,
    #[serde(rename = "Uncertain")]
    Uncertain,
    #[serde(rename = "Error")]
    Error,
    #[serde(rename = "No claim provided")]
    EmptyInput,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelyTrue => "Likely True",
            Verdict::LikelyFalse => "Likely False",
            Verdict::Uncertain => "Uncertain",
            Verdict::Error => "Error",
            Verdict::EmptyInput => "No claim provided",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How much the heuristic and the LLM agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Label shown for a heuristic result computed from zero evidence.
pub const INSUFFICIENT_EVIDENCE_LABEL: &str = "Insufficient evidence";

/// Aggregate verdict of the evidence heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicResult {
    /// 0-100.
    pub score: u8,
    pub verdict: Verdict,
    /// Set only when the evidence list was empty; the verdict is then
    /// `Uncertain` and the score 0.
    pub insufficient_evidence: bool,
    /// Up to five sources in retrieval order.
    pub top_sources: Vec<ScoredEvidence>,
}

impl HeuristicResult {
    pub fn insufficient() -> Self {
        Self {
            score: 0,
            verdict: Verdict::Uncertain,
            insufficient_evidence: true,
            top_sources: Vec::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.insufficient_evidence {
            INSUFFICIENT_EVIDENCE_LABEL
        } else {
            self.verdict.label()
        }
    }
}

/// The LLM's verdict, derived from its free-form explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmResult {
    pub verdict: Verdict,
    pub explanation: String,
}

/// Final output of one verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub claim: String,
    pub credibility_score: u8,
    pub verdict: Verdict,
    pub confidence: Confidence,
    pub rationale: String,
    pub top_sources: Vec<ScoredEvidence>,
}

impl VerificationResult {
    pub fn empty_input() -> Self {
        Self {
            claim: String::new(),
            credibility_score: 0,
            verdict: Verdict::EmptyInput,
            confidence: Confidence::Low,
            rationale: "Please enter a claim to verify.".to_string(),
            top_sources: Vec::new(),
        }
    }

    pub fn error(claim: &str, message: impl fmt::Display) -> Self {
        Self {
            claim: claim.to_string(),
            credibility_score: 0,
            verdict: Verdict::Error,
            confidence: Confidence::Low,
            rationale: format!("An error occurred during verification: {}", message),
            top_sources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serializes_to_display_label() {
        let json = serde_json::to_string(&Verdict::LikelyFalse).unwrap();
        assert_eq!(json, "\"Likely False\"");
        assert_eq!(Verdict::EmptyInput.to_string(), "No claim provided");
    }

    #[test]
    fn test_insufficient_heuristic_label() {
        let heuristic = HeuristicResult::insufficient();
        assert_eq!(heuristic.score, 0);
        assert_eq!(heuristic.verdict, Verdict::Uncertain);
        assert_eq!(heuristic.label(), INSUFFICIENT_EVIDENCE_LABEL);
    }

    #[test]
    fn test_error_result_is_zeroed() {
        let result = VerificationResult::error("claim", "boom");
        assert_eq!(result.credibility_score, 0);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.top_sources.is_empty());
        assert_eq!(result.rationale, "An error occurred during verification: boom");
    }
}
