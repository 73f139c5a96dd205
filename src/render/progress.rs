//! Single-line progress bar for the enrichment pass.

use std::io::{self, Write};

use crate::domain::Progress;

/// Redraws one line per update; `finish` ends the line
pub struct ProgressBar<W: Write> {
    out: W,
    width: usize,
}

impl ProgressBar<io::Stderr> {
    /// Progress bar on stderr, so stdout stays clean for the report
    pub fn stderr() -> Self {
        Self::new(io::stderr(), 30)
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    /// Draw the bar for `progress`
    pub fn update(&mut self, progress: Progress) {
        let filled = (progress.fraction() * self.width as f64).round() as usize;
        let filled = filled.min(self.width);

        // Terminal output is best effort
        let _ = write!(
            self.out,
            "\r[{}{}] {}/{} ({:>3.0}%)",
            "#".repeat(filled),
            ".".repeat(self.width - filled),
            progress.processed,
            progress.total,
            progress.fraction() * 100.0
        );
        let _ = self.out.flush();
    }

    /// Terminate the progress line
    pub fn finish(&mut self) {
        let _ = writeln!(self.out);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
