//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a candidate with its fitness.

use serde::{Deserialize, Serialize};

use crate::genome::candidate::Candidate;

/// An individual in the population
///
/// Wraps a candidate with its computed fitness value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The candidate value
    pub candidate: Candidate,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<f64>,
}

impl Individual {
    /// Create a new individual with an unevaluated candidate
    pub fn new(candidate: Candidate) -> Self {
        Self {
            candidate,
            fitness: None,
        }
    }

    /// Create a new individual with a known fitness
    pub fn with_fitness(candidate: Candidate, fitness: f64) -> Self {
        Self {
            candidate,
            fitness: Some(fitness),
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Fitness, or negative infinity when not evaluated
    pub fn fitness_or_worst(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    /// Set the fitness value
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}
