// claimcheck-core/src/providers/serpapi.rs
//! SerpApi-backed web search.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::SearchConfig;
use crate::errors::{ClaimCheckError, Result};
use crate::evidence::EvidenceRecord;
use crate::providers::SearchProvider;

pub struct SerpApiSearch {
    client: Client,
    endpoint: String,
    engine: String,
    api_key: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SerpApiResponse {
    organic_results: Vec<OrganicResult>,
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrganicResult {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
    displayed_link: Option<String>,
    date: Option<String>,
}

impl From<OrganicResult> for EvidenceRecord {
    fn from(result: OrganicResult) -> Self {
        EvidenceRecord {
            title: result.title.unwrap_or_default(),
            link: result.link.unwrap_or_default(),
            snippet: result.snippet.unwrap_or_default(),
            source: result.displayed_link.unwrap_or_default(),
            date: result.date.unwrap_or_default(),
        }
    }
}

impl SerpApiSearch {
    pub fn new(config: &SearchConfig, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("claimcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            engine: config.engine.clone(),
            api_key: api_key.to_string(),
        })
    }
}

impl SearchProvider for SerpApiSearch {
    fn name(&self) -> &str { "serpapi" }

    fn search(&self, query: &str, num_results: usize) -> Result<Vec<EvidenceRecord>> {
        debug!("Querying {} for up to {} results.", self.name(), num_results);

        let num = num_results.to_string();
        let resp = self.client
            .get(&self.endpoint)
            .query(&[
                ("engine", self.engine.as_str()),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let detail = serde_json::from_str::<SerpApiResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(ClaimCheckError::provider(self.name(), format!("HTTP {}: {}", status, detail)));
        }

        let parsed: SerpApiResponse = serde_json::from_str(&body)?;
        if let Some(message) = &parsed.error {
            // SerpApi reports "no results" as an error string on a 200 response.
            warn!("{} returned no organic results: {}", self.name(), message);
        }

        let records: Vec<EvidenceRecord> = parsed.organic_results.into_iter().map(EvidenceRecord::from).collect();
        debug!("{} returned {} results.", self.name(), records.len());
        Ok(records)
    }
}
