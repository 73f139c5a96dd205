//! Account handles and resolved account ids.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Base URL of public profile pages, used for the resolution hint
const PROFILE_URL_BASE: &str = "https://steamcommunity.com/id";

/// A user-supplied vanity name (e.g. the `gabelogannewell` in
/// `steamcommunity.com/id/gabelogannewell`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountHandle(String);

impl AccountHandle {
    /// Create a handle, rejecting empty input
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DashboardError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DashboardError::EmptyHandle);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public profile URL the user can check by hand
    pub fn profile_url(&self) -> String {
        format!("{}/{}/", PROFILE_URL_BASE, self.0)
    }
}

impl std::fmt::Display for AccountHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable numeric account id (SteamID64)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
