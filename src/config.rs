//! Run configuration
//!
//! [`GaConfig`] enumerates every tunable of a run. It is built once, validated
//! before the first generation, and never changed while the run is in flight.

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::genome::bounds::Bounds;

/// Configuration for a blend-crossover GA run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Population size
    pub pop_size: usize,
    /// Number of generations
    pub generations: usize,
    /// Probability that a parent pair is blended rather than copied
    pub crossover_rate: f64,
    /// Probability that a child is perturbed
    pub mutation_rate: f64,
    /// Standard deviation of the mutation noise
    pub mutation_scale: f64,
    /// Number of elite individuals copied unchanged into the next generation
    pub elitism_count: usize,
    /// Tournament size for selection
    pub tournament_k: usize,
    /// Blend factor for crossover
    pub alpha: f64,
    /// Search domain
    pub bounds: Bounds,
    /// Random seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            pop_size: 50,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            mutation_scale: 0.1,
            elitism_count: 1,
            tournament_k: 3,
            alpha: 0.5,
            bounds: Bounds::default_domain(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// The seeded demonstration run: pop 80, 120 generations, seed 42
    pub fn reference() -> Self {
        Self {
            pop_size: 80,
            generations: 120,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            mutation_scale: 0.08,
            elitism_count: 2,
            tournament_k: 3,
            alpha: 0.6,
            bounds: Bounds::default_domain(),
            seed: Some(42),
        }
    }

    /// Reject any configuration the engine cannot run
    pub fn validate(&self) -> EvoResult<()> {
        if self.pop_size == 0 {
            return Err(config_error("pop_size must be at least 1"));
        }
        if self.generations == 0 {
            return Err(config_error("generations must be at least 1"));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        if !(self.mutation_scale.is_finite() && self.mutation_scale > 0.0) {
            return Err(EvolutionError::Configuration(format!(
                "mutation_scale must be positive and finite, got {}",
                self.mutation_scale
            )));
        }
        if self.elitism_count > self.pop_size {
            return Err(EvolutionError::Configuration(format!(
                "elitism_count ({}) must not exceed pop_size ({})",
                self.elitism_count, self.pop_size
            )));
        }
        if self.tournament_k == 0 {
            return Err(config_error("tournament_k must be at least 1"));
        }
        if self.tournament_k > self.pop_size {
            return Err(EvolutionError::Configuration(format!(
                "tournament_k ({}) must not exceed pop_size ({})",
                self.tournament_k, self.pop_size
            )));
        }
        check_probability("alpha", self.alpha)?;
        self.bounds.validate()
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> EvoResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EvolutionError::Configuration(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn config_error(msg: &str) -> EvolutionError {
    EvolutionError::Configuration(msg.to_string())
}

fn check_probability(name: &str, value: f64) -> EvoResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EvolutionError::Configuration(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
