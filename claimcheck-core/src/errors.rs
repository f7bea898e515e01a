//! errors.rs - Custom error types for the claimcheck-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! The orchestrator folds every one of them into a terminal result, so the
//! variants matter for logging and tests rather than for the caller.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `claimcheck-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClaimCheckError {
    /// The claim was blank. Reported as the `EmptyInput` verdict, never as `Error`.
    #[error("No claim was provided")]
    EmptyInput,

    #[error("{provider} request failed: {message}")]
    ProviderFailure { provider: String, message: String },

    #[error("Missing {0} environment variable")]
    MissingCredential(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render prompt template: {0}")]
    Template(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClaimCheckError {
    /// Shorthand for a provider-side failure.
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderFailure {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

impl From<claimcheck_signals::keywords::DaachorseError> for ClaimCheckError {
    fn from(err: claimcheck_signals::keywords::DaachorseError) -> Self {
        Self::InvalidConfig(format!("keyword list could not be compiled: {}", err))
    }
}

impl From<tinytemplate::error::Error> for ClaimCheckError {
    fn from(err: tinytemplate::error::Error) -> Self {
        Self::Template(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClaimCheckError>;
