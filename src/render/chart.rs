//! Ranked horizontal bar chart of the most played games.

use std::fmt::Write as _;

use crate::domain::Dataset;

use super::{format_hours, truncate};

const LABEL_WIDTH: usize = 30;
const BAR_CHAR: char = '█';

/// Render the top `top_n` rows as bars scaled to the longest playtime.
///
/// Each bar is followed by the three row fields.
pub fn render_chart(dataset: &Dataset, top_n: usize, width: usize) -> String {
    let view = dataset.top(top_n);
    let mut out = String::new();

    let _ = writeln!(out, "Top {} Most Played Games", top_n);
    let _ = writeln!(out);

    if view.is_empty() {
        let _ = writeln!(out, "(no games)");
        return out;
    }

    let max = view
        .iter()
        .map(|r| r.playtime_hours)
        .fold(0.0_f64, f64::max);

    for row in view {
        let len = if max > 0.0 {
            ((row.playtime_hours / max) * width as f64).round() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(BAR_CHAR).take(len).collect();
        let pad = " ".repeat(width.saturating_sub(len));

        let _ = writeln!(
            out,
            "{:<30} |{}{}| {:.2} hrs (beat: {})",
            truncate(&row.name, LABEL_WIDTH),
            bar,
            pad,
            row.playtime_hours,
            format_hours(row.estimated_completion_hours)
        );
    }

    out
}
