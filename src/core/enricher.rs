//! Completion-time enrichment, memoized per exact title.
//!
//! Keys are the title exactly as received: "Portal" and "PORTAL" are two
//! entries and two lookups. Near-duplicate titles (DLC or regional suffixes)
//! are not collapsed.

use tracing::{debug, warn};

use crate::adapters::DurationSource;

use super::cache::BoundedCache;

/// Looks up main-story estimates, at most once per distinct title
pub struct DurationEnricher {
    source: Box<dyn DurationSource>,
    cache: BoundedCache<String, Option<f64>>,
}

impl DurationEnricher {
    pub fn new(source: Box<dyn DurationSource>, cache: BoundedCache<String, Option<f64>>) -> Self {
        Self { source, cache }
    }

    /// Estimated main-story hours for `name`, or `None` on a miss.
    ///
    /// Never fails: search errors are logged and remembered as a miss.
    pub async fn estimate_completion(&mut self, name: &str) -> Option<f64> {
        if let Some(cached) = self.cache.get(&name.to_string()) {
            debug!(%name, "Estimate served from cache");
            return cached;
        }

        let estimate = match self.source.search(name).await {
            Ok(matches) => matches.into_iter().next().map(|m| m.main_story_hours),
            Err(e) => {
                warn!(%name, source = self.source.name(), error = %e, "Estimate lookup failed");
                None
            }
        };

        if estimate.is_none() {
            debug!(%name, "No estimate found");
        }

        self.cache.insert(name.to_string(), estimate);
        estimate
    }

    pub fn cache(&self) -> &BoundedCache<String, Option<f64>> {
        &self.cache
    }
}
