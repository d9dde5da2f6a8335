//! Diagnostics and statistics
//!
//! This module provides statistics collection for evolutionary runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::genome::candidate::Candidate;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Index of the best individual (first on ties)
    pub best_index: usize,
    /// Candidate at `best_index`
    pub best_candidate: Candidate,
    /// Best fitness in this generation
    pub best_fitness: f64,
    /// Worst fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Fitness standard deviation
    pub fitness_std: f64,
}

impl GenerationStats {
    /// Compute statistics from an evaluated population
    ///
    /// Returns `None` if nothing in the population has been evaluated.
    pub fn from_population(
        population: &Population,
        generation: usize,
        evaluations: usize,
    ) -> Option<Self> {
        let best_index = population.best_index()?;
        let best = &population[best_index];

        Some(Self {
            generation,
            evaluations,
            best_index,
            best_candidate: best.candidate,
            best_fitness: best.fitness_or_worst(),
            worst_fitness: population
                .worst()
                .map(|w| w.fitness_or_worst())
                .unwrap_or(f64::INFINITY),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            fitness_std: population.fitness_std().unwrap_or(0.0),
        })
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }
}

/// Result of a run, handed to the caller once the last generation completes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Best candidate of the final population
    pub best_candidate: Candidate,
    /// Fitness of `best_candidate`
    pub best_fitness: f64,
    /// Best fitness per generation, one entry per generation
    pub history_best: Vec<f64>,
    /// Mean fitness per generation, one entry per generation
    pub history_mean: Vec<f64>,
    /// Number of generations run
    pub generations: usize,
    /// Total fitness evaluations, including the final re-evaluation
    pub evaluations: usize,
    /// Per-generation statistics
    pub stats: EvolutionStats,
}

impl RunResult {
    /// Assemble a result, deriving the histories from `stats`
    pub fn new(
        best_candidate: Candidate,
        best_fitness: f64,
        evaluations: usize,
        stats: EvolutionStats,
    ) -> Self {
        Self {
            best_candidate,
            best_fitness,
            history_best: stats.best_fitness_history(),
            history_mean: stats.mean_fitness_history(),
            generations: stats.num_generations(),
            evaluations,
            stats,
        }
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Run Summary:\n\
             - Generations: {}\n\
             - Evaluations: {}\n\
             - Best candidate: {:.6}\n\
             - Best fitness: {:.6}\n\
             - Final mean: {:.6}\n\
             - Runtime: {:.2}ms",
            self.generations,
            self.evaluations,
            self.best_candidate,
            self.best_fitness,
            self.history_mean.last().copied().unwrap_or(f64::NAN),
            self.stats.total_runtime_ms,
        )
    }
}

pub mod prelude {
    pub use super::{EvolutionStats, GenerationStats, RunResult};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::individual::Individual;

    fn create_test_population() -> Population {
        let individuals = vec![
            Individual::with_fitness(0.1, 10.0),
            Individual::with_fitness(0.2, 50.0),
            Individual::with_fitness(0.3, 30.0),
            Individual::with_fitness(0.4, 50.0),
            Individual::with_fitness(0.5, 10.0),
        ];
        Population::from_individuals(individuals)
    }

    fn stats_with(generation: usize, best: f64, mean: f64) -> GenerationStats {
        GenerationStats {
            generation,
            evaluations: 0,
            best_index: 0,
            best_candidate: 0.0,
            best_fitness: best,
            worst_fitness: 0.0,
            mean_fitness: mean,
            fitness_std: 0.0,
        }
    }

    #[test]
    fn test_generation_stats_from_population() {
        let pop = create_test_population();
        let stats = GenerationStats::from_population(&pop, 10, 100).unwrap();

        assert_eq!(stats.generation, 10);
        assert_eq!(stats.evaluations, 100);
        assert_eq!(stats.best_index, 1);
        assert_eq!(stats.best_candidate, 0.2);
        assert_eq!(stats.best_fitness, 50.0);
        assert_eq!(stats.worst_fitness, 10.0);
        assert_eq!(stats.mean_fitness, 30.0);
        assert_eq!(stats.fitness_std, 20.0);
    }

    #[test]
    fn test_generation_stats_unevaluated_population() {
        let pop = Population::from_candidates([0.0, 1.0]);
        assert!(GenerationStats::from_population(&pop, 0, 0).is_none());
    }

    #[test]
    fn test_evolution_stats_history() {
        let mut stats = EvolutionStats::new();
        for i in 0..5 {
            stats.record(stats_with(i, (i + 1) as f64 * 10.0, (i + 1) as f64 * 5.0));
        }

        assert_eq!(stats.num_generations(), 5);
        assert_eq!(
            stats.best_fitness_history(),
            vec![10.0, 20.0, 30.0, 40.0, 50.0]
        );
        assert_eq!(
            stats.mean_fitness_history(),
            vec![5.0, 10.0, 15.0, 20.0, 25.0]
        );
    }

    #[test]
    fn test_run_result_histories_match_stats() {
        let mut stats = EvolutionStats::new();
        stats.record(stats_with(0, 2.0, 1.0));
        stats.record(stats_with(1, 2.5, 1.5));
        stats.set_runtime(Duration::from_millis(1234));

        let result = RunResult::new(1.85, 2.85, 30, stats);

        assert_eq!(result.generations, 2);
        assert_eq!(result.history_best, vec![2.0, 2.5]);
        assert_eq!(result.history_mean, vec![1.0, 1.5]);

        let summary = result.summary();
        assert!(summary.contains("Generations: 2"));
        assert!(summary.contains("Best fitness: 2.850000"));
        assert!(summary.contains("Runtime: 1234.00ms"));
    }
}
