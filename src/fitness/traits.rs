//! Fitness traits
//!
//! This module defines the fitness evaluation trait. Fitness is always
//! maximized.

use crate::genome::candidate::Candidate;

/// Fitness function over scalar candidates
///
/// Implementations must be pure: the same candidate always yields the same
/// score. The engine relies on this when it evaluates in parallel.
pub trait Fitness: Send + Sync {
    /// Score a candidate (higher is better)
    fn evaluate(&self, candidate: Candidate) -> f64;

    /// Human-readable name used in logs
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Fitness for F
where
    F: Fn(Candidate) -> f64 + Send + Sync,
{
    fn evaluate(&self, candidate: Candidate) -> f64 {
        self(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_fitness() {
        let square = |x: f64| x * x;
        assert_eq!(square.evaluate(3.0), 9.0);
        assert_eq!(Fitness::name(&square), "custom");
    }

    #[test]
    fn test_fitness_as_trait_object() {
        let boxed: Box<dyn Fitness> = Box::new(|x: f64| -x);
        assert_eq!(boxed.evaluate(2.5), -2.5);
    }
}
