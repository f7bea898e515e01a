//! Builds the reasoning prompt sent to the LLM provider.
//!
//! The prompt embeds the claim and a pretty-printed JSON slice of the
//! retrieved evidence. The model answers in free text; no structured output
//! contract is assumed.

use lazy_static::lazy_static;
use log::debug;
use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::errors::Result;
use crate::evidence::EvidenceRecord;

const PROMPT_TEMPLATE: &str = "You are a claim verification assistant.
Claim: {claim}
Evidence sources: {sources}

Based only on these sources, answer in plain English:
- Is the claim supported, refuted, or unclear?
- Give a short explanation (2-3 sentences).
";

lazy_static! {
    /// Whether full prompts and model responses may appear in debug logs.
    pub static ref PROMPT_DEBUG_ALLOWED: bool = {
        std::env::var("CLAIMCHECK_ALLOW_DEBUG_PROMPTS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

#[derive(Serialize)]
struct PromptContext<'a> {
    claim: &'a str,
    sources: String,
}

/// Renders the prompt for `claim`, embedding at most `max_evidence` records.
pub fn build_prompt(claim: &str, evidence: &[EvidenceRecord], max_evidence: usize) -> Result<String> {
    let shown = &evidence[..evidence.len().min(max_evidence)];
    let sources = serde_json::to_string_pretty(shown)?;

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("prompt", PROMPT_TEMPLATE)?;
    let prompt = tt.render("prompt", &PromptContext { claim, sources })?;

    if *PROMPT_DEBUG_ALLOWED {
        debug!("Rendered prompt:\n{}", prompt);
    } else {
        debug!("Rendered prompt with {} evidence records ({} bytes).", shown.len(), prompt.len());
    }
    Ok(prompt)
}
