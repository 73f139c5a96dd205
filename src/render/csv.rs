//! CSV export of the dataset.
//!
//! UTF-8, one header row, fields quoted per RFC 4180 when they contain a
//! comma, a quote or a line break. Numbers keep at least one decimal place.
//! An absent estimate is an empty field.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::Dataset;

/// File name offered when the user does not pick one
pub const DEFAULT_EXPORT_FILE: &str = "steam_hltb_dashboard.csv";

const HEADER: [&str; 3] = ["Game", "Playtime (hrs)", "How Long it takes to beat (hrs)"];

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// `2.0` stays `2.0`, `10.25` stays `10.25`
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Write the dataset as CSV, rows in dataset order
pub fn write_csv<W: Write>(dataset: &Dataset, mut out: W) -> Result<()> {
    writeln!(out, "{}", HEADER.join(",")).context("Failed to write CSV header")?;

    for row in dataset.rows() {
        let estimate = row
            .estimated_completion_hours
            .map(format_number)
            .unwrap_or_default();

        writeln!(
            out,
            "{},{},{}",
            escape(&row.name),
            format_number(row.playtime_hours),
            estimate
        )
        .context("Failed to write CSV row")?;
    }

    out.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Export the dataset to a CSV file
pub fn export_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(dataset, std::io::BufWriter::new(file))
        .with_context(|| format!("Failed to export CSV: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetRow;

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            DatasetRow {
                name: "Plain".to_string(),
                playtime_hours: 2.0,
                estimated_completion_hours: None,
            },
            DatasetRow {
                name: "Warhammer 40,000: \"Dawn\"".to_string(),
                playtime_hours: 10.25,
                estimated_completion_hours: Some(12.5),
            },
        ])
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&dataset(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Game,Playtime (hrs),How Long it takes to beat (hrs)\n\
             \"Warhammer 40,000: \"\"Dawn\"\"\",10.25,12.5\n\
             Plain,2.0,\n"
        );
    }

    #[test]
    fn test_whole_hours_keep_a_decimal() {
        assert_eq!(format_number(10.0), "10.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(3.06), "3.06");

        let dataset = Dataset::from_rows(vec![DatasetRow {
            name: "Celeste".to_string(),
            playtime_hours: 10.0,
            estimated_completion_hours: Some(8.0),
        }]);
        let mut buf = Vec::new();
        write_csv(&dataset, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1), Some("Celeste,10.0,8.0"));
    }

    #[test]
    fn test_export_csv_to_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_EXPORT_FILE);

        export_csv(&dataset(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Game,"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.csv");
        assert!(export_csv(&dataset(), &path).is_err());
    }
}
