//! Maps free-form LLM explanation text onto a coarse verdict by keyword search.
//!
//! The false-keyword set is consulted first, so an explanation containing
//! both refutation and support language classifies as `LikelyFalse`.

use log::debug;

use claimcheck_signals::keywords::KeywordMatcher;

use crate::config::ClassifierConfig;
use crate::errors::Result;
use crate::verdict::{LlmResult, Verdict};

#[derive(Debug, Clone)]
pub struct LlmVerdictClassifier {
    false_keywords: KeywordMatcher,
    true_keywords: KeywordMatcher,
}

impl LlmVerdictClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        Ok(Self {
            false_keywords: KeywordMatcher::new(&config.false_keywords)?,
            true_keywords: KeywordMatcher::new(&config.true_keywords)?,
        })
    }

    pub fn classify(&self, text: &str) -> Verdict {
        if let Some(keyword) = self.false_keywords.find_first(text) {
            debug!("LLM explanation matched refutation keyword '{}'", keyword);
            Verdict::LikelyFalse
        } else if let Some(keyword) = self.true_keywords.find_first(text) {
            debug!("LLM explanation matched support keyword '{}'", keyword);
            Verdict::LikelyTrue
        } else {
            Verdict::Uncertain
        }
    }

    /// Classifies `text` and keeps it as the explanation.
    pub fn to_result(&self, text: String) -> LlmResult {
        LlmResult {
            verdict: self.classify(&text),
            explanation: text,
        }
    }
}
