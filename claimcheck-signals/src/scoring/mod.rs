// claimcheck-signals/src/scoring/mod.rs

/// Weights for the composite source score.
///
/// The three axis weights sum to 0.8, so a source without the fact-check
/// bonus can never score above 0.8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub domain_weight: f64,
    pub recency_weight: f64,
    pub relevance_weight: f64,
    pub factcheck_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            domain_weight: 0.4,
            recency_weight: 0.2,
            relevance_weight: 0.2,
            factcheck_bonus: 0.3,
        }
    }
}

/// The three per-source axes, each on the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSignals {
    pub domain_quality: f64,
    pub recency: f64,
    pub relevance: f64,
}

/// Smallest denominator used by [`relevance_ratio`].
pub const RELEVANCE_MIN_DENOMINATOR: f64 = 3.0;

/// Share of distinct claim terms that saturates relevance.
pub const RELEVANCE_SATURATION_SHARE: f64 = 0.5;

/// Weighted sum of the three axes, before any fact-check bonus.
pub fn composite_score(signals: &SourceSignals, weights: &ScoringWeights) -> f64 {
    weights.domain_weight * signals.domain_quality
        + weights.recency_weight * signals.recency
        + weights.relevance_weight * signals.relevance
}

/// Adds the fact-check bonus when applicable and caps the result at 1.0.
pub fn apply_factcheck_bonus(score: f64, is_factcheck: bool, weights: &ScoringWeights) -> f64 {
    let boosted = if is_factcheck {
        score + weights.factcheck_bonus
    } else {
        score
    };
    boosted.min(1.0)
}

/// Relevance of a source given how many distinct claim terms it contains.
///
/// Saturates at 1.0 once roughly half the terms are present; the floor
/// denominator keeps a single hit on a very short claim from saturating.
pub fn relevance_ratio(matched_terms: usize, distinct_terms: usize) -> f64 {
    let denominator = (distinct_terms as f64 * RELEVANCE_SATURATION_SHARE).max(RELEVANCE_MIN_DENOMINATOR);
    (matched_terms as f64 / denominator).min(1.0)
}
