//! Evidence records returned by the search provider and their scored form.

use serde::{Deserialize, Serialize};

/// One retrieved web result. Missing provider fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceRecord {
    pub title: String,
    pub link: String,
    pub snippet: String,
    /// Human-readable publisher or displayed domain.
    pub source: String,
    /// Free-form publication date as reported by the provider; never parsed
    /// beyond year extraction.
    pub date: String,
}

impl EvidenceRecord {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
        source: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
            source: source.into(),
            date: date.into(),
        }
    }
}

/// An evidence record together with its credibility score on a 0-100 scale,
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEvidence {
    #[serde(flatten)]
    pub record: EvidenceRecord,
    pub score: f64,
}
