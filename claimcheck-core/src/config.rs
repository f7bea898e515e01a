//! Configuration management for `claimcheck-core`.
//!
//! This module defines the provider settings and the domain/keyword lists that
//! drive scoring and classification. It handles deserialization of YAML
//! configurations and provides utilities for loading, merging, and validating
//! them. Scoring weights and verdict thresholds are deliberately absent: they
//! are constants of the scoring model, not tunables.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::errors::ClaimCheckError;

/// Environment variable holding the SerpApi key.
pub const SERPAPI_KEY_ENV: &str = "SERPAPI_API_KEY";
/// Environment variable holding the Gemini key.
pub const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings for the web search provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Full URL of the search endpoint.
    pub endpoint: String,
    /// SerpApi engine name (e.g., "google").
    pub engine: String,
    /// Result-count hint passed to the provider.
    pub num_results: usize,
    pub timeout_secs: u64,
}

/// Settings for the LLM reasoning provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReasoningConfig {
    /// Base URL of the generative language API, without the model path.
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
    /// How many evidence records are embedded in the prompt.
    pub max_prompt_evidence: usize,
}

/// Allow-lists used by the source scorer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringConfig {
    pub factcheck_domains: Vec<String>,
    pub authoritative_domains: Vec<String>,
    pub falsity_keywords: Vec<String>,
}

/// Keyword sets used to classify free-form model output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassifierConfig {
    pub false_keywords: Vec<String>,
    pub true_keywords: Vec<String>,
}

/// Represents the top-level configuration structure for ClaimCheck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClaimCheckConfig {
    pub search: SearchConfig,
    pub reasoning: ReasoningConfig,
    pub scoring: ScoringConfig,
    pub classifier: ClassifierConfig,
}

/// A user-supplied configuration file. Every key is optional and overrides
/// the built-in value only when present.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserConfig {
    pub search: SearchOverrides,
    pub reasoning: ReasoningOverrides,
    pub scoring: ScoringOverrides,
    pub classifier: ClassifierOverrides,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchOverrides {
    pub endpoint: Option<String>,
    pub engine: Option<String>,
    pub num_results: Option<usize>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReasoningOverrides {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_prompt_evidence: Option<usize>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringOverrides {
    pub factcheck_domains: Option<Vec<String>>,
    pub authoritative_domains: Option<Vec<String>>,
    pub falsity_keywords: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierOverrides {
    pub false_keywords: Option<Vec<String>>,
    pub true_keywords: Option<Vec<String>>,
}

impl ClaimCheckConfig {
    /// Loads the built-in configuration from the embedded YAML.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: ClaimCheckConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Builds the effective configuration: defaults, overridden by `explicit`
    /// when given, otherwise by the per-user file if one exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let defaults = Self::load_default()?;

        let user = match explicit {
            Some(path) => Some(UserConfig::load_from_file(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(UserConfig::load_from_file(&path)?),
                _ => {
                    debug!("No user configuration found; using built-in defaults.");
                    None
                }
            },
        };

        let config = merge_config(defaults, user);
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings that would otherwise fail later at request time.
    /// Every keyword and domain list needs at least one non-blank entry.
    pub fn validate(&self) -> std::result::Result<(), ClaimCheckError> {
        let mut errors = Vec::new();

        if self.search.endpoint.trim().is_empty() {
            errors.push("search.endpoint must not be empty.".to_string());
        }
        if self.search.num_results == 0 {
            errors.push("search.num_results must be at least 1.".to_string());
        }
        if self.search.timeout_secs == 0 {
            errors.push("search.timeout_secs must be at least 1.".to_string());
        }
        if self.reasoning.endpoint.trim().is_empty() {
            errors.push("reasoning.endpoint must not be empty.".to_string());
        }
        if self.reasoning.model.trim().is_empty() {
            errors.push("reasoning.model must not be empty.".to_string());
        }
        if self.reasoning.timeout_secs == 0 {
            errors.push("reasoning.timeout_secs must be at least 1.".to_string());
        }
        if self.reasoning.max_prompt_evidence == 0 {
            errors.push("reasoning.max_prompt_evidence must be at least 1.".to_string());
        }

        for (name, list) in [
            ("scoring.factcheck_domains", &self.scoring.factcheck_domains),
            ("scoring.authoritative_domains", &self.scoring.authoritative_domains),
            ("scoring.falsity_keywords", &self.scoring.falsity_keywords),
            ("classifier.false_keywords", &self.classifier.false_keywords),
            ("classifier.true_keywords", &self.classifier.true_keywords),
        ] {
            if list.iter().all(|entry| entry.trim().is_empty()) {
                errors.push(format!("{} must contain at least one non-blank entry.", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ClaimCheckError::InvalidConfig(format!(
                "validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}

impl UserConfig {
    /// Loads configuration overrides from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: UserConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Location of the per-user configuration file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("claimcheck").join("config.yaml"))
}

fn override_field<T: std::fmt::Debug>(target: &mut T, value: Option<T>, key: &str) {
    if let Some(value) = value {
        debug!("Overriding {} with user value: {:?}", key, value);
        *target = value;
    }
}

/// Applies user overrides on top of the defaults, field by field.
pub fn merge_config(default_config: ClaimCheckConfig, user_config: Option<UserConfig>) -> ClaimCheckConfig {
    let mut merged = default_config;

    let Some(user) = user_config else {
        return merged;
    };

    override_field(&mut merged.search.endpoint, user.search.endpoint, "search.endpoint");
    override_field(&mut merged.search.engine, user.search.engine, "search.engine");
    override_field(&mut merged.search.num_results, user.search.num_results, "search.num_results");
    override_field(&mut merged.search.timeout_secs, user.search.timeout_secs, "search.timeout_secs");

    override_field(&mut merged.reasoning.endpoint, user.reasoning.endpoint, "reasoning.endpoint");
    override_field(&mut merged.reasoning.model, user.reasoning.model, "reasoning.model");
    override_field(&mut merged.reasoning.timeout_secs, user.reasoning.timeout_secs, "reasoning.timeout_secs");
    override_field(
        &mut merged.reasoning.max_prompt_evidence,
        user.reasoning.max_prompt_evidence,
        "reasoning.max_prompt_evidence",
    );

    override_field(&mut merged.scoring.factcheck_domains, user.scoring.factcheck_domains, "scoring.factcheck_domains");
    override_field(
        &mut merged.scoring.authoritative_domains,
        user.scoring.authoritative_domains,
        "scoring.authoritative_domains",
    );
    override_field(&mut merged.scoring.falsity_keywords, user.scoring.falsity_keywords, "scoring.falsity_keywords");

    override_field(&mut merged.classifier.false_keywords, user.classifier.false_keywords, "classifier.false_keywords");
    override_field(&mut merged.classifier.true_keywords, user.classifier.true_keywords, "classifier.true_keywords");

    merged
}

/// API keys for the two providers.
#[derive(Clone)]
pub struct Credentials {
    pub serpapi_key: String,
    pub gemini_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("serpapi_key", &"<redacted>")
            .field("gemini_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Reads both keys from the environment. Empty values count as missing.
    pub fn from_env() -> std::result::Result<Self, ClaimCheckError> {
        Ok(Self {
            serpapi_key: read_key(SERPAPI_KEY_ENV)?,
            gemini_key: read_key(GEMINI_KEY_ENV)?,
        })
    }
}

fn read_key(var: &str) -> std::result::Result<String, ClaimCheckError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ClaimCheckError::MissingCredential(var.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_scoring_model() {
        let config = ClaimCheckConfig::load_default().unwrap();
        assert_eq!(config.search.num_results, 8);
        assert_eq!(config.reasoning.max_prompt_evidence, 5);
        assert!(config.scoring.factcheck_domains.iter().any(|d| d == "snopes.com"));
        assert_eq!(config.classifier.false_keywords.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_without_user_config_is_identity() {
        let defaults = ClaimCheckConfig::load_default().unwrap();
        assert_eq!(merge_config(defaults.clone(), None), defaults);
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let mut config = ClaimCheckConfig::load_default().unwrap();
        config.search.num_results = 0;
        config.reasoning.max_prompt_evidence = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("search.num_results"));
        assert!(err.contains("reasoning.max_prompt_evidence"));
    }

    #[test]
    fn test_validate_rejects_empty_lists() {
        let mut config = ClaimCheckConfig::load_default().unwrap();
        config.scoring.falsity_keywords.clear();
        config.classifier.true_keywords = vec!["  ".to_string()];
        match config.validate() {
            Err(ClaimCheckError::InvalidConfig(message)) => {
                assert!(message.contains("scoring.falsity_keywords"));
                assert!(message.contains("classifier.true_keywords"));
                assert!(!message.contains("scoring.factcheck_domains"));
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials { serpapi_key: "abc".into(), gemini_key: "xyz".into() };
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("abc"));
        assert!(!rendered.contains("xyz"));
    }
}
