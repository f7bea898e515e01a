// claimcheck-core/src/lib.rs
//! # ClaimCheck Core Library
//!
//! `claimcheck-core` assigns a credibility verdict to a natural-language claim
//! by combining retrieved web evidence with a heuristic scoring function and
//! an independent LLM judgment, then reconciling the two into a single score,
//! verdict and confidence label.
//!
//! ## Modules
//!
//! * `config`: Provider settings and the domain/keyword allow-lists, loaded from YAML.
//! * `evidence`: `EvidenceRecord` and `ScoredEvidence`.
//! * `verdict`: Verdict and confidence types plus the per-stage result structs.
//! * `scorer`: The per-source scorer (domain authority, recency, relevance).
//! * `aggregator`: Reduces scored sources to one heuristic verdict.
//! * `classifier`: Keyword classification of free-form LLM output.
//! * `fusion`: Merges heuristic and LLM verdicts into the final triple.
//! * `prompt`: Renders the reasoning prompt.
//! * `providers`: `SearchProvider`/`ReasoningProvider` traits and HTTP implementations.
//! * `orchestrator`: The `Verifier`, which sequences a full verification.
//! * `headless`: One-shot helpers wired from configuration and environment.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use claimcheck_core::{build_verifier, ClaimCheckConfig, Credentials};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = ClaimCheckConfig::resolve(None)?;
//!     let credentials = Credentials::from_env()?;
//!     let verifier = build_verifier(&config, &credentials)?;
//!
//!     let result = verifier.verify("The Great Wall of China is visible from space");
//!     println!("{} ({}/100, {} confidence)", result.verdict, result.credibility_score, result.confidence);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible setup (configuration, provider construction) returns `anyhow::Result`
//! or [`ClaimCheckError`]. Verification itself never fails: every error is
//! folded into a result whose verdict is `Error`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod aggregator;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod errors;
pub mod evidence;
pub mod fusion;
pub mod headless;
pub mod orchestrator;
pub mod prompt;
pub mod providers;
pub mod scorer;
pub mod verdict;

/// Re-exports the configuration types and loaders.
pub use config::{
    default_config_path,
    merge_config,
    ClaimCheckConfig,
    ClassifierConfig,
    Credentials,
    ReasoningConfig,
    ScoringConfig,
    SearchConfig,
    UserConfig,
    GEMINI_KEY_ENV,
    SERPAPI_KEY_ENV,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ClaimCheckError;

pub use evidence::{EvidenceRecord, ScoredEvidence};
pub use verdict::{Confidence, HeuristicResult, LlmResult, VerificationResult, Verdict};

/// Re-exports the scoring pipeline stages.
pub use aggregator::EvidenceAggregator;
pub use classifier::LlmVerdictClassifier;
pub use clock::{Clock, FixedClock, SystemClock};
pub use fusion::{fuse, Fused};
pub use scorer::{SourceScore, SourceScorer};

/// Re-exports the provider capability traits and their HTTP implementations.
pub use providers::{GeminiReasoning, ReasoningProvider, SearchProvider, SerpApiSearch};

pub use orchestrator::Verifier;
pub use headless::{build_verifier, headless_verify_claim};
