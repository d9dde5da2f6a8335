//! Progress observers
//!
//! Observers receive each generation's statistics as the run advances. They
//! are diagnostic only: an observer error is logged and dropped, never
//! propagated into the run.

use std::io::Write;

use crate::diagnostics::GenerationStats;
use crate::error::ObserverError;

/// Receives per-generation statistics
pub trait ProgressObserver {
    /// Called once per generation, after statistics are recorded
    fn on_generation(
        &mut self,
        stats: &GenerationStats,
        total_generations: usize,
    ) -> Result<(), ObserverError>;
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &mut O {
    fn on_generation(
        &mut self,
        stats: &GenerationStats,
        total_generations: usize,
    ) -> Result<(), ObserverError> {
        (**self).on_generation(stats, total_generations)
    }
}

/// Whether `generation` is one of the ~10 evenly spaced report points, or the last
pub fn is_report_generation(generation: usize, total_generations: usize) -> bool {
    let step = (total_generations / 10).max(1);
    generation % step == 0 || generation + 1 == total_generations
}

/// Observer that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_generation(&mut self, _: &GenerationStats, _: usize) -> Result<(), ObserverError> {
        Ok(())
    }
}

/// Logs report generations through `tracing` at info level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn on_generation(
        &mut self,
        stats: &GenerationStats,
        total_generations: usize,
    ) -> Result<(), ObserverError> {
        if is_report_generation(stats.generation, total_generations) {
            tracing::info!(
                generation = stats.generation,
                best = stats.best_fitness,
                x = stats.best_candidate,
                mean = stats.mean_fitness,
                "generation complete"
            );
        }
        Ok(())
    }
}

/// Writes one line per report generation to any writer
#[derive(Debug)]
pub struct WriterProgress<W: Write> {
    writer: W,
}

impl<W: Write> WriterProgress<W> {
    /// Report to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProgressObserver for WriterProgress<W> {
    fn on_generation(
        &mut self,
        stats: &GenerationStats,
        total_generations: usize,
    ) -> Result<(), ObserverError> {
        if is_report_generation(stats.generation, total_generations) {
            writeln!(
                self.writer,
                "Gen {:3} : best = {:.6} (x={:.6}), mean = {:.6}",
                stats.generation, stats.best_fitness, stats.best_candidate, stats.mean_fitness
            )?;
        }
        Ok(())
    }
}

/// Keeps every generation's statistics
#[derive(Clone, Debug, Default)]
pub struct HistoryRecorder {
    /// Recorded statistics, in generation order
    pub stats: Vec<GenerationStats>,
}

impl HistoryRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for HistoryRecorder {
    fn on_generation(&mut self, stats: &GenerationStats, _: usize) -> Result<(), ObserverError> {
        self.stats.push(stats.clone());
        Ok(())
    }
}
