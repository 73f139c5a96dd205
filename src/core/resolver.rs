//! Identity resolution: vanity handle to account id.

use tracing::{error, info, instrument};

use crate::adapters::{AccountDirectory, ResolveOutcome};
use crate::domain::{AccountHandle, AccountId};
use crate::error::DashboardError;

use super::retry::RetryPolicy;

/// Resolve a handle to an account id.
///
/// Success requires the service's explicit success flag. A decoded failure
/// is returned immediately; only transport failures are retried.
#[instrument(skip(directory, handle, retry), fields(handle = %handle))]
pub async fn resolve(
    directory: &dyn AccountDirectory,
    handle: &AccountHandle,
    retry: &RetryPolicy,
) -> Result<AccountId, DashboardError> {
    let outcome = retry
        .run("resolve_vanity", move || directory.resolve_vanity(handle))
        .await;

    match outcome {
        Ok(ResolveOutcome::Success { id }) => {
            info!(account_id = %id, "Resolved account");
            Ok(id)
        }
        Ok(ResolveOutcome::Failure { reason }) => {
            error!(%reason, "Handle did not resolve");
            Err(resolution_error(handle, reason))
        }
        Err(e) => {
            error!(error = %e, "Resolution request failed");
            Err(resolution_error(handle, format!("{:#}", e)))
        }
    }
}

fn resolution_error(handle: &AccountHandle, reason: String) -> DashboardError {
    DashboardError::Resolution {
        handle: handle.as_str().to_string(),
        profile_url: handle.profile_url(),
        reason,
    }
}
