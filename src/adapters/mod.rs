//! Adapter interfaces for the remote services.
//!
//! Two services feed the dashboard: the account directory (vanity
//! resolution + owned games) and the duration source (completion-time
//! search). Both are traits so the pipeline can run against stubs.

pub mod hltb;
pub mod steam;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{AccountHandle, AccountId, OwnedItem};

// Re-export the concrete clients
pub use hltb::HltbClient;
pub use steam::SteamClient;

/// Decoded outcome of a vanity resolution request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The handle maps to an account
    Success { id: AccountId },

    /// The service answered but found no account
    Failure { reason: String },
}

/// One ranked result from a duration search
#[derive(Debug, Clone, PartialEq)]
pub struct DurationMatch {
    /// Title as known by the duration source
    pub title: String,

    /// Main-story length in hours
    pub main_story_hours: f64,
}

/// Account directory: identity resolution and owned-library listing.
///
/// `Err` means the request itself failed (network, HTTP status, decoding).
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Resolve a vanity handle to an account id
    async fn resolve_vanity(&self, handle: &AccountHandle) -> Result<ResolveOutcome>;

    /// List every game owned by the account, free-to-play titles included
    async fn owned_games(&self, account_id: AccountId) -> Result<Vec<OwnedItem>>;

    /// Stable, non-secret identifier of the credential in use
    fn credential_fingerprint(&self) -> String;
}

/// Source of completion-time estimates
#[async_trait]
pub trait DurationSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Search by free-text title; results in the source's ranking order
    async fn search(&self, title: &str) -> Result<Vec<DurationMatch>>;
}
