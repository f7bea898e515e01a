//! The source scorer: rates a single evidence record against a claim on
//! domain authority, recency and textual relevance.
//!
//! All text matching is case-insensitive substring containment. Domains are
//! matched against the raw link text, so an authoritative name embedded in an
//! unrelated path or host still counts.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use claimcheck_signals::keywords::KeywordMatcher;
use claimcheck_signals::scoring::{
    apply_factcheck_bonus, composite_score, relevance_ratio, ScoringWeights, SourceSignals,
};

use crate::clock::{Clock, SystemClock};
use crate::config::ScoringConfig;
use crate::errors::Result;
use crate::evidence::EvidenceRecord;

pub const FACTCHECK_QUALITY: f64 = 1.0;
pub const AUTHORITATIVE_QUALITY: f64 = 0.9;
pub const INSTITUTIONAL_QUALITY: f64 = 0.85;
pub const DEFAULT_QUALITY: f64 = 0.6;

pub const NEUTRAL_RECENCY: f64 = 0.6;
pub const FRESH_RECENCY: f64 = 1.0;
pub const RECENT_RECENCY: f64 = 0.8;
pub const STALE_RECENCY: f64 = 0.4;

/// Suffixes that earn the institutional tier when no allow-list matched.
const INSTITUTIONAL_SUFFIXES: [&str; 2] = [".gov", ".edu"];

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"20\d{2}").unwrap());
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Per-record scoring outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceScore {
    pub signals: SourceSignals,
    /// Weighted composite including the fact-check bonus, capped at 1.0.
    pub composite: f64,
    /// The link matched a fact-check domain.
    pub factcheck: bool,
    /// The snippet contained a falsity keyword.
    pub falsity: bool,
}

#[derive(Debug, Clone)]
pub struct SourceScorer {
    factcheck_domains: KeywordMatcher,
    authoritative_domains: KeywordMatcher,
    institutional_suffixes: KeywordMatcher,
    falsity_keywords: KeywordMatcher,
    weights: ScoringWeights,
    clock: Arc<dyn Clock>,
}

impl SourceScorer {
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &ScoringConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            factcheck_domains: KeywordMatcher::new(&config.factcheck_domains)?,
            authoritative_domains: KeywordMatcher::new(&config.authoritative_domains)?,
            institutional_suffixes: KeywordMatcher::new(INSTITUTIONAL_SUFFIXES)?,
            falsity_keywords: KeywordMatcher::new(&config.falsity_keywords)?,
            weights: ScoringWeights::default(),
            clock,
        })
    }

    pub fn is_factcheck(&self, link: &str) -> bool {
        self.factcheck_domains.matches(link)
    }

    pub fn has_falsity_language(&self, snippet: &str) -> bool {
        self.falsity_keywords.matches(snippet)
    }

    pub fn domain_quality(&self, link: &str) -> f64 {
        if self.factcheck_domains.matches(link) {
            FACTCHECK_QUALITY
        } else if self.authoritative_domains.matches(link) {
            AUTHORITATIVE_QUALITY
        } else if self.institutional_suffixes.matches(link) {
            INSTITUTIONAL_QUALITY
        } else {
            DEFAULT_QUALITY
        }
    }

    /// Scores the first `20xx` year in `date` by its age. Anything that does
    /// not yield a year is neutral.
    pub fn recency(&self, date: &str) -> f64 {
        let Some(found) = YEAR_PATTERN.find(date) else {
            return NEUTRAL_RECENCY;
        };
        let Ok(year) = found.as_str().parse::<i32>() else {
            return NEUTRAL_RECENCY;
        };

        let age = self.clock.current_year() - year;
        if age <= 1 {
            FRESH_RECENCY
        } else if age <= 3 {
            RECENT_RECENCY
        } else {
            STALE_RECENCY
        }
    }

    pub fn relevance(&self, claim: &str, snippet: &str, title: &str) -> f64 {
        relevance_for_terms(&claim_terms(claim), snippet, title)
    }

    pub fn score(&self, claim: &str, record: &EvidenceRecord) -> SourceScore {
        let signals = SourceSignals {
            domain_quality: self.domain_quality(&record.link),
            recency: self.recency(&record.date),
            relevance: self.relevance(claim, &record.snippet, &record.title),
        };

        let factcheck = self.is_factcheck(&record.link);
        let composite = apply_factcheck_bonus(composite_score(&signals, &self.weights), factcheck, &self.weights);

        SourceScore {
            signals,
            composite,
            factcheck,
            falsity: self.has_falsity_language(&record.snippet),
        }
    }
}

/// Distinct lowercase word tokens of a claim.
pub fn claim_terms(claim: &str) -> BTreeSet<String> {
    let lowered = claim.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn relevance_for_terms(terms: &BTreeSet<String>, snippet: &str, title: &str) -> f64 {
    let text = format!("{} {}", snippet, title).to_lowercase();
    let matched = terms.iter().filter(|term| text.contains(term.as_str())).count();
    relevance_ratio(matched, terms.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClaimCheckConfig;

    const EPSILON: f64 = 1e-9;

    fn scorer(year: i32) -> SourceScorer {
        let config = ClaimCheckConfig::load_default().unwrap();
        SourceScorer::with_clock(&config.scoring, Arc::new(crate::clock::FixedClock(year))).unwrap()
    }

    #[test]
    fn test_domain_quality_tiers() {
        let s = scorer(2025);
        assert_eq!(s.domain_quality("https://www.Snopes.com/fact-check/foo"), FACTCHECK_QUALITY);
        assert_eq!(s.domain_quality("https://www.reuters.com/fact-check/bar"), FACTCHECK_QUALITY);
        assert_eq!(s.domain_quality("https://www.bbc.com/news/1"), AUTHORITATIVE_QUALITY);
        assert_eq!(s.domain_quality("https://some-blog.example.com/"), DEFAULT_QUALITY);
    }

    #[test]
    fn test_domain_quality_is_substring_based() {
        let s = scorer(2025);
        // An authoritative name inside an unrelated path still counts.
        assert_eq!(s.domain_quality("https://spam.example.com/mirror/nytimes.com/story"), AUTHORITATIVE_QUALITY);
    }

    #[test]
    fn test_institutional_tier_only_without_allow_list_hit() {
        let config = ScoringConfig {
            factcheck_domains: vec!["snopes.com".into()],
            authoritative_domains: vec!["nature.com".into()],
            falsity_keywords: vec!["false".into()],
        };
        let s = SourceScorer::with_clock(&config, Arc::new(crate::clock::FixedClock(2025))).unwrap();
        assert_eq!(s.domain_quality("https://data.census.gov/table"), INSTITUTIONAL_QUALITY);
        assert_eq!(s.domain_quality("https://cs.stanford.edu/"), INSTITUTIONAL_QUALITY);
        assert_eq!(s.domain_quality("https://www.nature.com/articles/x"), AUTHORITATIVE_QUALITY);
    }

    #[test]
    fn test_recency_tiers() {
        let s = scorer(2025);
        assert_eq!(s.recency("Mar 3, 2025"), FRESH_RECENCY);
        assert_eq!(s.recency("2024-11-02"), FRESH_RECENCY);
        assert_eq!(s.recency("Jan 2023"), RECENT_RECENCY);
        assert_eq!(s.recency("2022"), RECENT_RECENCY);
        assert_eq!(s.recency("12 May 2019"), STALE_RECENCY);
        assert_eq!(s.recency("2027"), FRESH_RECENCY);
    }

    #[test]
    fn test_recency_is_neutral_without_year() {
        let s = scorer(2025);
        assert_eq!(s.recency(""), NEUTRAL_RECENCY);
        assert_eq!(s.recency("3 days ago"), NEUTRAL_RECENCY);
        assert_eq!(s.recency("1999"), NEUTRAL_RECENCY);
    }

    #[test]
    fn test_relevance_three_distinct_terms_all_present() {
        let s = scorer(2025);
        let relevance = s.relevance("Vaccines cause autism", "No link between vaccines and autism", "Do they cause it?");
        assert!((relevance - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_relevance_counts_distinct_terms_once() {
        let s = scorer(2025);
        let relevance = s.relevance("the the the", "the end", "");
        assert!((relevance - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_claim_terms_lowercase_and_dedupe() {
        let terms = claim_terms("The sky is GREEN, the sky!");
        let expected: Vec<&str> = vec!["green", "is", "sky", "the"];
        assert_eq!(terms.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_composite_pre_bonus_ceiling() {
        let s = scorer(2025);
        let record = EvidenceRecord::new(
            "Sky colour explained",
            "https://www.nasa.gov/sky",
            "why the sky is blue",
            "nasa.gov",
            "2025",
        );
        let score = s.score("sky blue", &record);
        assert!(!score.factcheck);
        assert!(score.composite <= 0.8 + EPSILON);
    }

    #[test]
    fn test_factcheck_bonus_and_cap() {
        let s = scorer(2025);
        let record = EvidenceRecord::new(
            "Fact check: the sky is green",
            "https://www.politifact.com/factchecks/sky",
            "This claim is false.",
            "politifact.com",
            "2025",
        );
        let score = s.score("sky green", &record);
        assert!(score.factcheck);
        assert!(score.falsity);
        // 0.4 * 1.0 + 0.2 * 1.0 + 0.2 * (2 / 3) + 0.3, capped at 1.0
        assert!((score.composite - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_falsity_only_checks_snippet() {
        let s = scorer(2025);
        let record = EvidenceRecord::new("False alarm", "https://example.com", "all good", "", "");
        assert!(!s.score("alarm", &record).falsity);
    }
}
