//! Selection operators

use rand::Rng;

use crate::error::{EvoResult, EvolutionError, OperatorError};
use crate::genome::candidate::Candidate;
use crate::operators::traits::SelectionOperator;

/// Tournament selection operator
///
/// Draws `tournament_size` indices uniformly with replacement and keeps the
/// fittest. A contestant only displaces the current leader with a strictly
/// greater fitness, so the first one drawn wins ties.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of draws)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    ///
    /// # Panics
    /// Panics if `tournament_size` is zero
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Fallible constructor for user-supplied sizes
    pub fn try_new(tournament_size: usize) -> Result<Self, OperatorError> {
        if tournament_size == 0 {
            return Err(OperatorError::InvalidConfiguration(
                "tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, population: &[(Candidate, f64)], rng: &mut R) -> EvoResult<usize> {
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let mut best: Option<(usize, f64)> = None;
        for _ in 0..self.tournament_size {
            let i = rng.gen_range(0..population.len());
            let fitness = population[i].1;
            match best {
                Some((_, best_fitness)) if fitness <= best_fitness => {}
                _ => best = Some((i, fitness)),
            }
        }

        best.map(|(i, _)| i).ok_or_else(|| {
            OperatorError::SelectionFailed("tournament drew no contestants".to_string()).into()
        })
    }
}
