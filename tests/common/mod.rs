//! Stub adapters shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use playdash::adapters::steam::decode_resolve_response;
use playdash::adapters::{AccountDirectory, DurationMatch, DurationSource, ResolveOutcome};
use playdash::core::{PipelineOptions, RetryPolicy};
use playdash::domain::{AccountHandle, AccountId, OwnedItem};

pub const ACCOUNT: u64 = 76561197960287930;

/// Account directory answering from fixed data and counting calls
pub struct StubDirectory {
    pub outcome: ResolveOutcome,
    /// Raw ResolveVanityURL body decoded in place of `outcome`
    pub resolve_body: Option<String>,
    pub items: Vec<OwnedItem>,
    pub fingerprint: String,
    /// Transport failures to return before resolving succeeds
    pub resolve_failures: usize,
    pub fail_listing: bool,
    pub resolve_calls: Arc<AtomicUsize>,
    pub listing_calls: Arc<AtomicUsize>,
}

impl StubDirectory {
    pub fn with_items(items: Vec<OwnedItem>) -> Self {
        Self {
            outcome: ResolveOutcome::Success {
                id: AccountId::new(ACCOUNT),
            },
            resolve_body: None,
            items,
            fingerprint: "stub-key".to_string(),
            resolve_failures: 0,
            fail_listing: false,
            resolve_calls: Arc::new(AtomicUsize::new(0)),
            listing_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unresolvable() -> Self {
        Self {
            outcome: ResolveOutcome::Failure {
                reason: "No match".to_string(),
            },
            ..Self::with_items(Vec::new())
        }
    }

    /// Resolution answers with `body` as the Steam API would send it
    pub fn answering(body: &str) -> Self {
        Self {
            resolve_body: Some(body.to_string()),
            ..Self::with_items(vec![OwnedItem::new("Game A", 60)])
        }
    }
}

#[async_trait]
impl AccountDirectory for StubDirectory {
    async fn resolve_vanity(&self, _handle: &AccountHandle) -> Result<ResolveOutcome> {
        let call = self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if call < self.resolve_failures {
            anyhow::bail!("connection reset");
        }
        match &self.resolve_body {
            Some(body) => decode_resolve_response(body),
            None => Ok(self.outcome.clone()),
        }
    }

    async fn owned_games(&self, _account_id: AccountId) -> Result<Vec<OwnedItem>> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            anyhow::bail!("Steam API error (403 Forbidden)");
        }
        Ok(self.items.clone())
    }

    fn credential_fingerprint(&self) -> String {
        self.fingerprint.clone()
    }
}

/// Duration source answering from a title table and counting searches
pub struct StubSource {
    pub results: HashMap<String, Vec<DurationMatch>>,
    pub failing: Vec<String>,
    pub calls: Arc<AtomicUsize>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            failing: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Single ranked result for `title`
    pub fn with_estimate(mut self, title: &str, hours: f64) -> Self {
        self.results.insert(
            title.to_string(),
            vec![DurationMatch {
                title: title.to_string(),
                main_story_hours: hours,
            }],
        );
        self
    }

    /// Several ranked results for `title`, best first
    pub fn with_ranked(mut self, title: &str, ranked: &[(&str, f64)]) -> Self {
        let matches = ranked
            .iter()
            .map(|(t, h)| DurationMatch {
                title: t.to_string(),
                main_story_hours: *h,
            })
            .collect();
        self.results.insert(title.to_string(), matches);
        self
    }

    /// Searches for `title` fail with a transport error
    pub fn failing_on(mut self, title: &str) -> Self {
        self.failing.push(title.to_string());
        self
    }
}

#[async_trait]
impl DurationSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search(&self, title: &str) -> Result<Vec<DurationMatch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.iter().any(|t| t == title) {
            anyhow::bail!("service unavailable");
        }
        Ok(self.results.get(title).cloned().unwrap_or_default())
    }
}

/// Options with no retry delays
pub fn fast_options() -> PipelineOptions {
    PipelineOptions {
        retry: RetryPolicy {
            max_attempts: 3,
            initial_delay_ms: 1,
            max_delay_ms: 1,
            backoff_multiplier: 1.0,
        },
        ..Default::default()
    }
}

pub fn handle() -> AccountHandle {
    AccountHandle::new("gaben").unwrap()
}
