//! Dataset assembly: owned items + estimates into sorted rows.

use tracing::{info, instrument};

use crate::domain::{playtime_hours, Dataset, DatasetRow, OwnedItem, Progress};

use super::enricher::DurationEnricher;

/// Build the dataset, one row per item, in fetch order, then sort.
///
/// `on_progress` is called after every row. Row count always equals item
/// count; a failed lookup only leaves the estimate absent.
#[instrument(skip_all, fields(items = items.len()))]
pub async fn assemble<F>(
    items: &[OwnedItem],
    enricher: &mut DurationEnricher,
    mut on_progress: F,
) -> Dataset
where
    F: FnMut(Progress),
{
    let total = items.len();
    let mut rows = Vec::with_capacity(total);

    for (i, item) in items.iter().enumerate() {
        let estimated_completion_hours = enricher.estimate_completion(&item.name).await;

        rows.push(DatasetRow {
            name: item.name.clone(),
            playtime_hours: playtime_hours(item.usage_minutes),
            estimated_completion_hours,
        });

        on_progress(Progress {
            processed: i + 1,
            total,
        });
    }

    let dataset = Dataset::from_rows(rows);
    info!(
        rows = dataset.len(),
        enriched = dataset.enriched_count(),
        "Dataset assembled"
    );
    dataset
}
