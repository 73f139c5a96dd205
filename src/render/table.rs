//! Fixed-width table of every dataset row.

use std::fmt::Write as _;

use crate::domain::Dataset;

use super::{format_hours, truncate};

const NAME_WIDTH: usize = 50;

/// Render the full sorted dataset as a table
pub fn render_table(dataset: &Dataset) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<50} {:>16} {:>16}",
        "GAME", "PLAYTIME (HRS)", "HLTB MAIN (HRS)"
    );
    let _ = writeln!(out, "{}", "-".repeat(84));

    for row in dataset.rows() {
        let _ = writeln!(
            out,
            "{:<50} {:>16.2} {:>16}",
            truncate(&row.name, NAME_WIDTH),
            row.playtime_hours,
            format_hours(row.estimated_completion_hours)
        );
    }

    let _ = writeln!(
        out,
        "\nTotal: {} games, {:.2} hrs played, {} with estimates",
        dataset.len(),
        dataset.total_playtime_hours(),
        dataset.enriched_count()
    );

    out
}
