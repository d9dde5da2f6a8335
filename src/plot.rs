//! Fitness history charts
//!
//! Rendering is a best-effort step after the run. [`render_best_effort`]
//! never fails: a missing renderer or a failed render leaves the
//! [`RunResult`] untouched.

use std::io::Write;

use crate::diagnostics::RunResult;
use crate::error::ObserverError;

/// Something that can draw best/mean fitness against generation index
pub trait HistoryPlot {
    /// Render the two equal-length series
    fn render(&mut self, history_best: &[f64], history_mean: &[f64]) -> Result<(), ObserverError>;
}

/// Text chart written to any writer
///
/// `*` marks best fitness, `.` mean fitness, `#` where both land on the same cell.
#[derive(Debug)]
pub struct AsciiPlot<W: Write> {
    writer: W,
    width: usize,
    height: usize,
}

impl<W: Write> AsciiPlot<W> {
    /// A 60×15 chart
    pub fn new(writer: W) -> Self {
        Self::with_size(writer, 60, 15)
    }

    /// A chart of the given size in character cells (minimum 2×2)
    pub fn with_size(writer: W, width: usize, height: usize) -> Self {
        Self {
            writer,
            width: width.max(2),
            height: height.max(2),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn grid(&self, best: &[f64], mean: &[f64], lo: f64, hi: f64) -> Vec<Vec<char>> {
        let n = best.len();
        let columns = self.width.min(n);
        let mut grid = vec![vec![' '; columns]; self.height];

        let row_of = |v: f64| {
            let t = (v - lo) / (hi - lo);
            let from_bottom = (t * (self.height - 1) as f64).round() as usize;
            self.height - 1 - from_bottom.min(self.height - 1)
        };

        for col in 0..columns {
            let idx = if columns == 1 {
                0
            } else {
                col * (n - 1) / (columns - 1)
            };
            let (rb, rm) = (row_of(best[idx]), row_of(mean[idx]));
            grid[rm][col] = '.';
            grid[rb][col] = if rb == rm { '#' } else { '*' };
        }
        grid
    }
}

impl<W: Write> HistoryPlot for AsciiPlot<W> {
    fn render(&mut self, history_best: &[f64], history_mean: &[f64]) -> Result<(), ObserverError> {
        if history_best.is_empty() {
            return Err(ObserverError::Render("no generations to plot".to_string()));
        }
        if history_best.len() != history_mean.len() {
            return Err(ObserverError::Render(format!(
                "series length mismatch: {} best vs {} mean",
                history_best.len(),
                history_mean.len()
            )));
        }

        if history_best.iter().chain(history_mean).any(|v| !v.is_finite()) {
            return Err(ObserverError::Render("non-finite fitness in history".to_string()));
        }
        let (mut lo, mut hi) = history_best
            .iter()
            .chain(history_mean)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if hi - lo < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }

        let grid = self.grid(history_best, history_mean, lo, hi);

        writeln!(self.writer, "GA progress (* best, . mean)")?;
        for (r, row) in grid.iter().enumerate() {
            let label = if r == 0 {
                format!("{hi:>10.4}")
            } else if r + 1 == grid.len() {
                format!("{lo:>10.4}")
            } else {
                " ".repeat(10)
            };
            writeln!(self.writer, "{label} |{}", row.iter().collect::<String>())?;
        }
        let columns = grid.first().map_or(0, Vec::len);
        writeln!(self.writer, "{} +{}", " ".repeat(10), "-".repeat(columns))?;
        writeln!(
            self.writer,
            "{} 0{:>width$}",
            " ".repeat(10),
            history_best.len() - 1,
            width = columns.saturating_sub(1)
        )?;
        writeln!(self.writer, "{}  generation", " ".repeat(10))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render `result`'s histories if a renderer is available, logging any failure.
///
/// Returns whether a chart was produced.
pub fn render_best_effort(plot: Option<&mut dyn HistoryPlot>, result: &RunResult) -> bool {
    let Some(plot) = plot else {
        tracing::debug!("no history renderer configured, skipping plot");
        return false;
    };
    match plot.render(&result.history_best, &result.history_mean) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "failed to render fitness history");
            false
        }
    }
}
