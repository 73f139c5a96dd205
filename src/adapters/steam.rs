//! Steam Web API client.
//!
//! Endpoints:
//! - GET /ISteamUser/ResolveVanityURL/v1/
//! - GET /IPlayerService/GetOwnedGames/v1/
//!
//! Auth: `key` query parameter.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::{AccountDirectory, ResolveOutcome};
use crate::domain::library::UNKNOWN_NAME;
use crate::domain::{AccountHandle, AccountId, OwnedItem};

/// Default Steam Web API base URL
pub const DEFAULT_API_BASE: &str = "https://api.steampowered.com";

/// Steam Web API client
pub struct SteamClient {
    api_base: String,
    api_key: String,
    client: reqwest::Client,
}

/// Envelope shared by both endpoints
#[derive(Debug, Deserialize)]
struct SteamEnvelope<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct ResolveVanityResponse {
    #[serde(default)]
    success: Option<i64>,
    #[serde(default)]
    steamid: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwnedGamesResponse {
    #[serde(default)]
    games: Vec<OwnedGame>,
}

#[derive(Debug, Deserialize)]
struct OwnedGame {
    #[serde(default)]
    appid: Option<u64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    playtime_forever: Option<u64>,
}

impl From<OwnedGame> for OwnedItem {
    fn from(game: OwnedGame) -> Self {
        OwnedItem {
            app_id: game.appid,
            name: game.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            usage_minutes: game.playtime_forever.unwrap_or(0),
        }
    }
}

impl ResolveVanityResponse {
    fn into_outcome(self) -> ResolveOutcome {
        match self.success {
            Some(1) => {}
            Some(flag) => {
                return ResolveOutcome::Failure {
                    reason: self
                        .message
                        .unwrap_or_else(|| format!("success flag {}", flag)),
                };
            }
            None => {
                return ResolveOutcome::Failure {
                    reason: self
                        .message
                        .unwrap_or_else(|| "response carried no success flag".to_string()),
                };
            }
        }

        match self.steamid.as_deref().map(str::parse::<AccountId>) {
            Some(Ok(id)) => ResolveOutcome::Success { id },
            Some(Err(_)) => ResolveOutcome::Failure {
                reason: "response carried a malformed steamid".to_string(),
            },
            None => ResolveOutcome::Failure {
                reason: "response carried no steamid".to_string(),
            },
        }
    }
}

/// Decode a ResolveVanityURL body
pub fn decode_resolve_response(body: &str) -> Result<ResolveOutcome> {
    let envelope: SteamEnvelope<ResolveVanityResponse> =
        serde_json::from_str(body).context("Failed to parse ResolveVanityURL response")?;
    Ok(envelope.response.into_outcome())
}

/// Decode a GetOwnedGames body; a missing `games` list is an empty library
pub fn decode_owned_games_response(body: &str) -> Result<Vec<OwnedItem>> {
    let envelope: SteamEnvelope<OwnedGamesResponse> =
        serde_json::from_str(body).context("Failed to parse GetOwnedGames response")?;
    Ok(envelope.response.games.into_iter().map(OwnedItem::from).collect())
}

/// First 16 hex chars of SHA-256(key)
pub fn fingerprint_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

impl SteamClient {
    /// Create a new client against the public API
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base(DEFAULT_API_BASE.to_string(), api_key, None)
    }

    /// Create a client with a custom base URL and optional request timeout
    pub fn with_base(api_base: String, api_key: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Build API URL
    fn api_url(&self, interface: &str, method: &str) -> String {
        format!("{}/{}/{}/v1/", self.api_base, interface, method)
    }

    /// GET an endpoint and return the body, failing on non-2xx status
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        let response = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to reach Steam endpoint {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Steam API error ({}) from {}", status, url);
        }

        response
            .text()
            .await
            .context("Failed to read Steam response body")
    }
}

#[async_trait]
impl AccountDirectory for SteamClient {
    async fn resolve_vanity(&self, handle: &AccountHandle) -> Result<ResolveOutcome> {
        let url = self.api_url("ISteamUser", "ResolveVanityURL");
        debug!(%handle, "Resolving vanity URL");

        let body = self
            .get(&url, &[("vanityurl", handle.as_str().to_string())])
            .await?;
        decode_resolve_response(&body)
    }

    async fn owned_games(&self, account_id: AccountId) -> Result<Vec<OwnedItem>> {
        let url = self.api_url("IPlayerService", "GetOwnedGames");
        debug!(%account_id, "Listing owned games");

        let body = self
            .get(
                &url,
                &[
                    ("steamid", account_id.to_string()),
                    ("include_appinfo", "true".to_string()),
                    ("include_played_free_games", "true".to_string()),
                ],
            )
            .await?;
        decode_owned_games_response(&body)
    }

    fn credential_fingerprint(&self) -> String {
        fingerprint_key(&self.api_key)
    }
}
