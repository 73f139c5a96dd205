//! The dashboard pipeline.
//!
//! Resolver -> Fetcher -> Enricher (once per item) -> Assembler, strictly in
//! sequence. The caches live inside the pipeline and persist across runs on
//! the same instance, so re-rendering a handle reuses earlier lookups.

use std::time::Duration;

use tracing::{info, instrument};

use crate::adapters::{AccountDirectory, DurationSource};
use crate::domain::{AccountHandle, AccountId, Dataset, Progress};
use crate::error::DashboardError;

use super::assembler::assemble;
use super::cache::BoundedCache;
use super::enricher::DurationEnricher;
use super::fetcher::LibraryFetcher;
use super::resolver::resolve;
use super::retry::RetryPolicy;

/// Observable pipeline events, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Handle resolved to an account
    Resolved { account_id: AccountId },

    /// Library listed
    Fetched { count: usize },

    /// One more row built
    Progress(Progress),
}

/// Cache bounds and retry behaviour
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Maximum cached libraries
    pub library_capacity: usize,

    /// Maximum cached title estimates
    pub title_capacity: usize,

    /// Optional expiry for both caches
    pub cache_ttl: Option<Duration>,

    /// Retry policy for resolution and listing
    pub retry: RetryPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            library_capacity: 64,
            title_capacity: 4096,
            cache_ttl: None,
            retry: RetryPolicy::default(),
        }
    }
}

/// Resolve, fetch, enrich, assemble
pub struct Pipeline {
    directory: Box<dyn AccountDirectory>,
    fetcher: LibraryFetcher,
    enricher: DurationEnricher,
    retry: RetryPolicy,
}

impl Pipeline {
    pub fn new(
        directory: Box<dyn AccountDirectory>,
        source: Box<dyn DurationSource>,
        options: PipelineOptions,
    ) -> Self {
        let mut library_cache = BoundedCache::new(options.library_capacity);
        let mut title_cache = BoundedCache::new(options.title_capacity);
        if let Some(ttl) = options.cache_ttl {
            library_cache = library_cache.with_ttl(ttl);
            title_cache = title_cache.with_ttl(ttl);
        }

        Self {
            directory,
            fetcher: LibraryFetcher::new(library_cache),
            enricher: DurationEnricher::new(source, title_cache),
            retry: options.retry,
        }
    }

    /// Run the whole pipeline for one handle.
    ///
    /// Resolution and fetch failures stop the run before any later stage is
    /// attempted. Enrichment misses never do.
    #[instrument(skip(self, handle, on_event), fields(handle = %handle))]
    pub async fn run<F>(&mut self, handle: &AccountHandle, mut on_event: F) -> Result<Dataset, DashboardError>
    where
        F: FnMut(PipelineEvent),
    {
        info!("Starting dashboard run");

        let account_id = resolve(self.directory.as_ref(), handle, &self.retry).await?;
        on_event(PipelineEvent::Resolved { account_id });

        let items = self
            .fetcher
            .fetch_owned_items(self.directory.as_ref(), account_id, &self.retry)
            .await?;
        on_event(PipelineEvent::Fetched { count: items.len() });

        let dataset = assemble(&items, &mut self.enricher, |p| {
            on_event(PipelineEvent::Progress(p))
        })
        .await;

        info!(rows = dataset.len(), "Dashboard run completed");
        Ok(dataset)
    }

    pub fn fetcher(&self) -> &LibraryFetcher {
        &self.fetcher
    }

    pub fn enricher(&self) -> &DurationEnricher {
        &self.enricher
    }
}
