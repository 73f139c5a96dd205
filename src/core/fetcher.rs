//! Owned-library listing with a per-credential, per-account cache.

use tracing::{debug, error, info, instrument};

use crate::adapters::AccountDirectory;
use crate::domain::{AccountId, OwnedItem};
use crate::error::DashboardError;

use super::cache::BoundedCache;
use super::retry::RetryPolicy;

/// Cache key: (credential fingerprint, account id)
pub type LibraryKey = (String, AccountId);

/// Fetches owned games, reusing earlier results for the same key
pub struct LibraryFetcher {
    cache: BoundedCache<LibraryKey, Vec<OwnedItem>>,
}

impl LibraryFetcher {
    pub fn new(cache: BoundedCache<LibraryKey, Vec<OwnedItem>>) -> Self {
        Self { cache }
    }

    /// List the account's owned games.
    ///
    /// An empty library is a valid result. Failures are never cached.
    #[instrument(skip(self, directory, account_id, retry), fields(account_id = %account_id))]
    pub async fn fetch_owned_items(
        &mut self,
        directory: &dyn AccountDirectory,
        account_id: AccountId,
        retry: &RetryPolicy,
    ) -> Result<Vec<OwnedItem>, DashboardError> {
        let key = (directory.credential_fingerprint(), account_id);

        if let Some(items) = self.cache.get(&key) {
            debug!(count = items.len(), "Owned games served from cache");
            return Ok(items);
        }

        let items = retry
            .run("owned_games", move || directory.owned_games(account_id))
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list owned games");
                DashboardError::Fetch {
                    account_id,
                    reason: format!("{:#}", e),
                }
            })?;

        info!(count = items.len(), "Fetched owned games");
        self.cache.insert(key, items.clone());
        Ok(items)
    }

    pub fn cache(&self) -> &BoundedCache<LibraryKey, Vec<OwnedItem>> {
        &self.cache
    }
}
