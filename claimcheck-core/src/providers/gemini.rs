// claimcheck-core/src/providers/gemini.rs
//! Gemini `generateContent` text generation.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::ReasoningConfig;
use crate::errors::{ClaimCheckError, Result};
use crate::prompt::PROMPT_DEBUG_ALLOWED;
use crate::providers::ReasoningProvider;

pub struct GeminiReasoning {
    client: Client,
    url: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GeminiReasoning {
    pub fn new(config: &ReasoningConfig, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("claimcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            url,
            api_key: api_key.to_string(),
        })
    }
}

impl ReasoningProvider for GeminiReasoning {
    fn name(&self) -> &str { "gemini" }

    fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: [RequestContent { parts: [RequestPart { text: prompt }] }],
        };

        let resp = self.client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ClaimCheckError::provider(self.name(), format!("HTTP {}: {}", status, detail)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(ClaimCheckError::provider(self.name(), "response contained no text"));
        }

        if *PROMPT_DEBUG_ALLOWED {
            debug!("{} response:\n{}", self.name(), text);
        } else {
            debug!("{} returned {} characters.", self.name(), text.len());
        }
        Ok(text)
    }
}
