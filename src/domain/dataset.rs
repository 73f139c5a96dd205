//! The enriched dataset handed to the presentation surface.
//!
//! Rows are kept sorted by playtime, highest first. Sorting is stable, so
//! games with equal playtime keep the order the library service returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of rows in the chart view unless configured otherwise
pub const DEFAULT_CHART_ROWS: usize = 10;

/// Convert minutes to hours, rounded to two decimals (half away from zero)
pub fn playtime_hours(usage_minutes: u64) -> f64 {
    round2(usage_minutes as f64 / 60.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One row of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Game title
    pub name: String,

    /// Playtime in hours, two decimals
    pub playtime_hours: f64,

    /// Estimated main-story length in hours (absent when enrichment missed)
    pub estimated_completion_hours: Option<f64>,
}

/// Sorted, enriched rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<DatasetRow>,

    /// When the dataset was assembled
    pub generated_at: DateTime<Utc>,
}

impl Dataset {
    /// Build a dataset from rows in fetch order; sorts them by playtime
    pub fn from_rows(mut rows: Vec<DatasetRow>) -> Self {
        // sort_by is stable: ties keep fetch order
        rows.sort_by(|a, b| b.playtime_hours.total_cmp(&a.playtime_hours));
        Self {
            rows,
            generated_at: Utc::now(),
        }
    }

    /// Full sorted view (table + export)
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, or all of them when there are fewer
    pub fn top(&self, n: usize) -> &[DatasetRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Chart view: the ten most played games
    pub fn chart_view(&self) -> &[DatasetRow] {
        self.top(DEFAULT_CHART_ROWS)
    }

    /// Number of rows carrying an estimate
    pub fn enriched_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.estimated_completion_hours.is_some())
            .count()
    }

    /// Sum of playtime across all rows
    pub fn total_playtime_hours(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.playtime_hours).sum())
    }
}

/// Progress of the enrichment pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Rows built so far
    pub processed: usize,

    /// Total rows to build
    pub total: usize,
}

impl Progress {
    /// Fraction in `[0, 1]`; an empty pass counts as complete
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, hours: f64) -> DatasetRow {
        DatasetRow {
            name: name.to_string(),
            playtime_hours: hours,
            estimated_completion_hours: None,
        }
    }

    #[test]
    fn test_playtime_rounding() {
        assert_eq!(playtime_hours(120), 2.0);
        assert_eq!(playtime_hours(125), 2.08);
        assert_eq!(playtime_hours(0), 0.0);
        assert_eq!(playtime_hours(1), 0.02);
        assert_eq!(playtime_hours(90), 1.5);
    }

    #[test]
    fn test_sort_descending_and_stable() {
        let dataset = Dataset::from_rows(vec![
            row("a", 1.0),
            row("b", 5.0),
            row("c", 1.0),
            row("d", 3.0),
            row("e", 1.0),
        ]);

        let names: Vec<&str> = dataset.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_top_view() {
        let rows: Vec<DatasetRow> = (0..15).map(|i| row(&format!("g{}", i), i as f64)).collect();
        let dataset = Dataset::from_rows(rows);

        assert_eq!(dataset.chart_view().len(), 10);
        assert_eq!(dataset.chart_view()[0].name, "g14");
        assert_eq!(dataset.top(3).len(), 3);
        assert_eq!(dataset.top(100).len(), 15);
    }

    #[test]
    fn test_small_dataset_chart_is_full_set() {
        let dataset = Dataset::from_rows(vec![row("a", 2.0), row("b", 1.0)]);
        assert_eq!(dataset.chart_view(), dataset.rows());
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(Progress { processed: 1, total: 4 }.fraction(), 0.25);
        assert_eq!(Progress { processed: 0, total: 0 }.fraction(), 1.0);
        assert!(Progress { processed: 3, total: 3 }.is_complete());
    }

    #[test]
    fn test_summary_helpers() {
        let mut with_estimate = row("a", 2.5);
        with_estimate.estimated_completion_hours = Some(12.0);
        let dataset = Dataset::from_rows(vec![with_estimate, row("b", 1.25)]);

        assert_eq!(dataset.enriched_count(), 1);
        assert_eq!(dataset.total_playtime_hours(), 3.75);
    }
}
