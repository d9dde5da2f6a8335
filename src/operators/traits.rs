//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.
//! Every operator that produces a candidate receives the domain bounds and
//! must return a value inside them.

use rand::Rng;

use crate::error::EvoResult;
use crate::genome::bounds::Bounds;
use crate::genome::candidate::Candidate;

/// Selection operator trait
///
/// Selects individuals from a scored population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual.
    fn select<R: Rng>(
        &self,
        population: &[(Candidate, f64)], // (candidate, fitness) pairs
        rng: &mut R,
    ) -> EvoResult<usize>;
}

/// Crossover operator trait
///
/// Combines two parents into two offspring clamped to `bounds`.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: Candidate,
        parent2: Candidate,
        bounds: &Bounds,
        rng: &mut R,
    ) -> (Candidate, Candidate);
}

/// Mutation operator trait
///
/// Returns a perturbed copy of a candidate clamped to `bounds`.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to a candidate
    fn mutate<R: Rng>(&self, candidate: Candidate, bounds: &Bounds, rng: &mut R) -> Candidate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Mock selection operator for testing
    struct MockSelection;

    impl SelectionOperator for MockSelection {
        fn select<R: Rng>(&self, population: &[(Candidate, f64)], rng: &mut R) -> EvoResult<usize> {
            Ok(rng.gen_range(0..population.len()))
        }
    }

    // Mock crossover operator for testing
    struct MockCrossover;

    impl CrossoverOperator for MockCrossover {
        fn crossover<R: Rng>(
            &self,
            parent1: Candidate,
            parent2: Candidate,
            bounds: &Bounds,
            _rng: &mut R,
        ) -> (Candidate, Candidate) {
            // Just swap parents as a simple crossover
            (bounds.clamp(parent2), bounds.clamp(parent1))
        }
    }

    #[test]
    fn test_mock_selection() {
        let mut rng = StdRng::seed_from_u64(0);
        let population: Vec<(Candidate, f64)> = (0..10).map(|i| (i as f64, i as f64)).collect();

        for _ in 0..5 {
            let idx = MockSelection.select(&population, &mut rng).unwrap();
            assert!(idx < population.len());
        }
    }

    #[test]
    fn test_mock_crossover() {
        let mut rng = StdRng::seed_from_u64(0);
        let bounds = Bounds::default_domain();

        let (c1, c2) = MockCrossover.crossover(1.5, 5.0, &bounds, &mut rng);
        assert_eq!(c1, 2.0);
        assert_eq!(c2, 1.5);
    }
}
