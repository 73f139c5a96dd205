//! Error taxonomy for the dashboard pipeline.
//!
//! Resolution and fetch failures are terminal for a run. Enrichment misses
//! are not errors: they leave the estimate absent and the run continues.

use thiserror::Error;

use crate::domain::AccountId;

/// Terminal errors surfaced to the user
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Account handle is empty")]
    EmptyHandle,

    #[error("Steam Web API key is not set (use --api-key or STEAM_API_KEY)")]
    MissingCredential,

    #[error("Could not resolve vanity URL: {profile_url} ({reason})")]
    Resolution {
        handle: String,
        profile_url: String,
        reason: String,
    },

    #[error("Failed to fetch owned games for {account_id}: {reason}")]
    Fetch { account_id: AccountId, reason: String },
}
