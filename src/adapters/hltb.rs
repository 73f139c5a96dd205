//! HowLongToBeat search client.
//!
//! Endpoint: POST /api/search
//! Auth: none, but the service rejects requests without browser-like
//! `User-Agent` and `Referer` headers.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DurationMatch, DurationSource};
use crate::domain::dataset::round2;

/// Default HowLongToBeat base URL
pub const DEFAULT_BASE_URL: &str = "https://howlongtobeat.com";

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Results requested per search
const PAGE_SIZE: u32 = 20;

/// HowLongToBeat search client
pub struct HltbClient {
    base_url: String,
    client: reqwest::Client,
}

/// Search request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest {
    search_type: &'static str,
    search_terms: Vec<String>,
    search_page: u32,
    size: u32,
    search_options: serde_json::Value,
}

impl SearchRequest {
    fn for_title(title: &str) -> Self {
        Self {
            search_type: "games",
            search_terms: title.split_whitespace().map(str::to_string).collect(),
            search_page: 1,
            size: PAGE_SIZE,
            search_options: serde_json::json!({
                "games": {
                    "userId": 0,
                    "platform": "",
                    "sortCategory": "popular",
                    "rangeCategory": "main",
                    "rangeTime": { "min": 0, "max": 0 },
                    "gameplay": { "perspective": "", "flow": "", "genre": "" },
                    "modifier": ""
                },
                "users": { "sortCategory": "postcount" },
                "filter": "",
                "sort": 0,
                "randomizer": 0
            }),
        }
    }
}

/// Search response body
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(default)]
    game_name: String,
    /// Main story length in seconds
    #[serde(default)]
    comp_main: u64,
}

impl From<SearchEntry> for DurationMatch {
    fn from(entry: SearchEntry) -> Self {
        DurationMatch {
            title: entry.game_name,
            main_story_hours: round2(entry.comp_main as f64 / 3600.0),
        }
    }
}

/// Decode a search response body into ranked matches
pub fn decode_search_response(body: &str) -> Result<Vec<DurationMatch>> {
    let response: SearchResponse =
        serde_json::from_str(body).context("Failed to parse HowLongToBeat search response")?;
    Ok(response.data.into_iter().map(DurationMatch::from).collect())
}

impl HltbClient {
    /// Create a new client against the public site
    pub fn new() -> Result<Self> {
        Self::with_base(DEFAULT_BASE_URL.to_string(), None)
    }

    /// Create a client with a custom base URL and optional request timeout
    pub fn with_base(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/api/search", self.base_url)
    }
}

#[async_trait]
impl DurationSource for HltbClient {
    fn name(&self) -> &str {
        "howlongtobeat"
    }

    async fn search(&self, title: &str) -> Result<Vec<DurationMatch>> {
        let url = self.search_url();
        debug!(%title, "Searching HowLongToBeat");

        let response = self
            .client
            .post(&url)
            .header("Referer", format!("{}/", self.base_url))
            .header("Origin", self.base_url.as_str())
            .json(&SearchRequest::for_title(title))
            .send()
            .await
            .context("Failed to reach HowLongToBeat")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HowLongToBeat error ({})", status);
        }

        let body = response
            .text()
            .await
            .context("Failed to read HowLongToBeat response body")?;
        decode_search_response(&body)
    }
}
