// File: claimcheck-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the verifier in headless mode (non-UI).
//! Wires the SerpApi and Gemini providers from configuration and environment
//! credentials, and exposes the one-shot `headless_verify_claim` entry point.

use anyhow::Result;
use log::error;

use crate::config::{ClaimCheckConfig, Credentials};
use crate::orchestrator::Verifier;
use crate::providers::{GeminiReasoning, SerpApiSearch};
use crate::verdict::VerificationResult;

/// Builds a verifier backed by the HTTP providers.
pub fn build_verifier(config: &ClaimCheckConfig, credentials: &Credentials) -> Result<Verifier> {
    let search = SerpApiSearch::new(&config.search, &credentials.serpapi_key)?;
    let reasoning = GeminiReasoning::new(&config.reasoning, &credentials.gemini_key)?;
    Ok(Verifier::new(config, Box::new(search), Box::new(reasoning))?)
}

/// Verifies a claim using the effective configuration and environment
/// credentials. Like [`Verifier::verify`], it never fails: setup problems are
/// reported as an `Error` result.
pub fn headless_verify_claim(claim: &str) -> VerificationResult {
    if claim.trim().is_empty() {
        return VerificationResult::empty_input();
    }

    let verifier = ClaimCheckConfig::resolve(None)
        .and_then(|config| {
            let credentials = Credentials::from_env()?;
            build_verifier(&config, &credentials)
        });

    match verifier {
        Ok(verifier) => verifier.verify(claim),
        Err(e) => {
            error!("Failed to set up verifier: {:#}", e);
            VerificationResult::error(claim, format!("{:#}", e))
        }
    }
}
