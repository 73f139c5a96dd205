//! Presentation surface for an assembled dataset.
//!
//! Everything here consumes a finished `Dataset` (or progress events) and
//! produces text: a table, a CSV export, a ranked bar chart and a progress
//! bar for the enrichment pass.

pub mod chart;
pub mod csv;
pub mod progress;
pub mod table;

pub use chart::render_chart;
pub use csv::{export_csv, write_csv, DEFAULT_EXPORT_FILE};
pub use progress::ProgressBar;
pub use table::render_table;

/// Placeholder for an absent estimate
pub(crate) const MISSING: &str = "-";

/// Truncate to `max` characters, marking the cut with "..."
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Format an optional hour value
pub(crate) fn format_hours(hours: Option<f64>) -> String {
    hours
        .map(|h| format!("{:.2}", h))
        .unwrap_or_else(|| MISSING.to_string())
}
