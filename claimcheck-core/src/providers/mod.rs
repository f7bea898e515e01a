//! Capability interfaces for the two external collaborators, and their HTTP
//! implementations.
//!
//! The orchestrator only ever sees these traits, so tests can substitute
//! deterministic fakes for the network-backed providers.

use crate::errors::Result;
use crate::evidence::EvidenceRecord;

pub mod gemini;
pub mod serpapi;

pub use gemini::GeminiReasoning;
pub use serpapi::SerpApiSearch;

/// Retrieves web evidence for a query.
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Returns results in provider ranking order. `num_results` is a hint;
    /// providers may return fewer.
    fn search(&self, query: &str, num_results: usize) -> Result<Vec<EvidenceRecord>>;
}

/// Opaque text-generation oracle.
pub trait ReasoningProvider: Send + Sync {
    fn name(&self) -> &str;

    fn generate(&self, prompt: &str) -> Result<String>;
}
