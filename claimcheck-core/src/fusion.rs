//! Verdict fusion: reconciles the evidence heuristic with the LLM verdict.
//!
//! A decisive LLM verdict overrides the heuristic label while the score is a
//! 70/30 blend. Confidence reflects whether the two classifiers agreed before
//! that override.
//!
//! License: MIT OR APACHE 2.0

use claimcheck_signals::statistics::round_half_even;

use crate::verdict::{Confidence, HeuristicResult, LlmResult, Verdict};

/// Share of the final score taken from the heuristic when the LLM is decisive.
pub const HEURISTIC_SHARE: f64 = 0.7;
/// Share of the final score taken from the LLM verdict (as 100 or 0).
pub const LLM_SHARE: f64 = 0.3;
/// Agreeing verdicts at or above this heuristic score are high confidence.
pub const HIGH_CONFIDENCE_UPPER: u8 = 75;
/// Agreeing verdicts at or below this heuristic score are high confidence.
pub const HIGH_CONFIDENCE_LOWER: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fused {
    pub score: u8,
    pub verdict: Verdict,
    pub confidence: Confidence,
}

fn blend(heuristic_score: u8, llm_score: f64) -> u8 {
    let blended = round_half_even(HEURISTIC_SHARE * f64::from(heuristic_score) + LLM_SHARE * llm_score);
    blended.clamp(0.0, 100.0) as u8
}

/// Confidence from the pre-override verdicts.
///
/// A heuristic built from no evidence is labelled "Insufficient evidence" and
/// therefore never agrees with the LLM.
pub fn determine_confidence(heuristic: &HeuristicResult, llm_verdict: Verdict) -> Confidence {
    let agree = !heuristic.insufficient_evidence && heuristic.verdict == llm_verdict;
    if !agree {
        Confidence::Low
    } else if heuristic.score >= HIGH_CONFIDENCE_UPPER || heuristic.score <= HIGH_CONFIDENCE_LOWER {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

pub fn fuse(heuristic: &HeuristicResult, llm: &LlmResult) -> Fused {
    let (score, verdict) = match llm.verdict {
        Verdict::LikelyTrue => (blend(heuristic.score, 100.0), Verdict::LikelyTrue),
        Verdict::LikelyFalse => (blend(heuristic.score, 0.0), Verdict::LikelyFalse),
        _ => (heuristic.score, heuristic.verdict),
    };

    Fused {
        score,
        verdict,
        confidence: determine_confidence(heuristic, llm.verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic(score: u8, verdict: Verdict) -> HeuristicResult {
        HeuristicResult {
            score,
            verdict,
            insufficient_evidence: false,
            top_sources: Vec::new(),
        }
    }

    fn llm(verdict: Verdict) -> LlmResult {
        LlmResult { verdict, explanation: "text".to_string() }
    }

    #[test]
    fn test_llm_true_overrides_with_blend() {
        let fused = fuse(&heuristic(40, Verdict::Uncertain), &llm(Verdict::LikelyTrue));
        assert_eq!(fused.score, 58);
        assert_eq!(fused.verdict, Verdict::LikelyTrue);
        assert_eq!(fused.confidence, Confidence::Low);
    }

    #[test]
    fn test_llm_false_overrides_with_blend() {
        let fused = fuse(&heuristic(60, Verdict::Uncertain), &llm(Verdict::LikelyFalse));
        assert_eq!(fused.score, 42);
        assert_eq!(fused.verdict, Verdict::LikelyFalse);
    }

    #[test]
    fn test_llm_true_caps_at_hundred() {
        let fused = fuse(&heuristic(100, Verdict::LikelyTrue), &llm(Verdict::LikelyTrue));
        assert_eq!(fused.score, 100);
        assert_eq!(fused.confidence, Confidence::High);
    }

    #[test]
    fn test_uncertain_llm_keeps_heuristic() {
        let fused = fuse(&heuristic(72, Verdict::LikelyTrue), &llm(Verdict::Uncertain));
        assert_eq!(fused.score, 72);
        assert_eq!(fused.verdict, Verdict::LikelyTrue);
        assert_eq!(fused.confidence, Confidence::Low);
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(determine_confidence(&heuristic(80, Verdict::LikelyTrue), Verdict::LikelyTrue), Confidence::High);
        assert_eq!(determine_confidence(&heuristic(50, Verdict::Uncertain), Verdict::Uncertain), Confidence::Medium);
        assert_eq!(determine_confidence(&heuristic(20, Verdict::LikelyFalse), Verdict::LikelyFalse), Confidence::High);
        assert_eq!(determine_confidence(&heuristic(25, Verdict::LikelyFalse), Verdict::LikelyFalse), Confidence::High);
        assert_eq!(determine_confidence(&heuristic(75, Verdict::LikelyTrue), Verdict::LikelyTrue), Confidence::High);
        assert_eq!(determine_confidence(&heuristic(74, Verdict::LikelyTrue), Verdict::LikelyTrue), Confidence::Medium);
    }

    #[test]
    fn test_disagreement_is_always_low() {
        for score in [0u8, 10, 50, 90, 100] {
            let h = heuristic(score, Verdict::LikelyTrue);
            assert_eq!(determine_confidence(&h, Verdict::LikelyFalse), Confidence::Low);
        }
    }

    #[test]
    fn test_insufficient_evidence_never_agrees() {
        let fused = fuse(&HeuristicResult::insufficient(), &llm(Verdict::Uncertain));
        assert_eq!(fused.score, 0);
        assert_eq!(fused.verdict, Verdict::Uncertain);
        assert_eq!(fused.confidence, Confidence::Low);
    }

    #[test]
    fn test_blend_uses_half_even_rounding() {
        // 0.7 * 55 = 38.5
        assert_eq!(fuse(&heuristic(55, Verdict::Uncertain), &llm(Verdict::LikelyFalse)).score, 38);
        // 0.7 * 45 + 30 = 61.5
        assert_eq!(fuse(&heuristic(45, Verdict::Uncertain), &llm(Verdict::LikelyTrue)).score, 62);
    }
}
