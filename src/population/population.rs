//! Population type
//!
//! This module provides the Population container type.

use std::cmp::Ordering;

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{EvoResult, EvolutionError};
use crate::fitness::traits::Fitness;
use crate::genome::bounds::Bounds;
use crate::genome::candidate::{make_individual, Candidate};
use crate::population::individual::Individual;

/// A population of individuals
///
/// Order matters: index ties in selection, statistics and elitism are all
/// broken in favour of the lower index.
#[derive(Clone, Debug, Default)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Current generation number
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create an unevaluated population from raw candidates
    pub fn from_candidates(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self::from_individuals(candidates.into_iter().map(Individual::new).collect())
    }

    /// Create a random population.
    ///
    /// Draws one uniform value per individual, in index order.
    pub fn random<R: Rng>(size: usize, bounds: &Bounds, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(make_individual(bounds, rng)))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Candidate values in population order
    pub fn candidates(&self) -> Vec<Candidate> {
        self.individuals.iter().map(|i| i.candidate).collect()
    }

    /// Get candidate-fitness pairs for selection
    pub fn as_fitness_pairs(&self) -> Vec<(Candidate, f64)> {
        self.individuals
            .iter()
            .map(|i| (i.candidate, i.fitness_or_worst()))
            .collect()
    }

    /// Evaluate every individual (sequential), one fitness call each.
    ///
    /// Returns the number of evaluations performed.
    pub fn evaluate<Fit>(&mut self, fitness: &Fit) -> EvoResult<usize>
    where
        Fit: Fitness + ?Sized,
    {
        for individual in &mut self.individuals {
            let f = checked_fitness(fitness, individual.candidate)?;
            individual.set_fitness(f);
        }
        Ok(self.individuals.len())
    }

    /// Index of the best individual; the first one wins on ties
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, individual) in self.individuals.iter().enumerate() {
            let Some(f) = individual.fitness else {
                continue;
            };
            match best {
                Some((_, best_f)) if f <= best_f => {}
                _ => best = Some((i, f)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Get the best individual (by fitness)
    pub fn best(&self) -> Option<&Individual> {
        self.best_index().map(|i| &self.individuals[i])
    }

    /// Get the worst individual (by fitness)
    pub fn worst(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .min_by(|a, b| {
                a.fitness_or_worst()
                    .partial_cmp(&b.fitness_or_worst())
                    .unwrap_or(Ordering::Equal)
            })
    }

    /// Indices of the `count` fittest individuals, best first.
    ///
    /// The sort is stable, so equal fitness keeps population order.
    pub fn elite_indices(&self, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.individuals.len()).collect();
        indices.sort_by(|&a, &b| {
            self.individuals[b]
                .fitness_or_worst()
                .partial_cmp(&self.individuals[a].fitness_or_worst())
                .unwrap_or(Ordering::Equal)
        });
        indices.truncate(count);
        indices
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();

        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<f64>() / evaluated.len() as f64)
        }
    }

    /// Compute fitness standard deviation
    pub fn fitness_std(&self) -> Option<f64> {
        let mean = self.mean_fitness()?;
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();

        if evaluated.len() < 2 {
            return None;
        }

        let variance = evaluated.iter().map(|f| (f - mean).powi(2)).sum::<f64>()
            / (evaluated.len() - 1) as f64;
        Some(variance.sqrt())
    }
}

/// Parallel evaluation support (requires `parallel` feature)
#[cfg(feature = "parallel")]
impl Population {
    /// Evaluate every individual using the given fitness function (parallel)
    pub fn evaluate_parallel<Fit>(&mut self, fitness: &Fit) -> EvoResult<usize>
    where
        Fit: Fitness + ?Sized,
    {
        self.individuals
            .par_iter_mut()
            .try_for_each(|individual| {
                let f = checked_fitness(fitness, individual.candidate)?;
                individual.set_fitness(f);
                Ok::<(), EvolutionError>(())
            })?;
        Ok(self.individuals.len())
    }
}

/// Sequential fallback for parallel evaluation (when `parallel` feature is disabled)
#[cfg(not(feature = "parallel"))]
impl Population {
    /// Evaluate every individual (falls back to sequential)
    pub fn evaluate_parallel<Fit>(&mut self, fitness: &Fit) -> EvoResult<usize>
    where
        Fit: Fitness + ?Sized,
    {
        self.evaluate(fitness)
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

fn checked_fitness<Fit>(fitness: &Fit, candidate: Candidate) -> EvoResult<f64>
where
    Fit: Fitness + ?Sized,
{
    let f = fitness.evaluate(candidate);
    if f.is_finite() {
        Ok(f)
    } else {
        Err(EvolutionError::FitnessEvaluation(format!(
            "{} returned {} for candidate {}",
            fitness.name(),
            f,
            candidate
        )))
    }
}
