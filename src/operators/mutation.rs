//! Mutation operators

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::OperatorError;
use crate::genome::bounds::Bounds;
use crate::genome::candidate::Candidate;
use crate::operators::traits::MutationOperator;

/// Gaussian mutation
///
/// With probability `probability`, adds noise drawn from `N(0, sigma²)`.
/// The result is clamped into the domain whether or not it was perturbed.
///
/// Each call consumes one uniform draw, plus one Gaussian draw when the
/// perturbation fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianMutation {
    /// Probability of perturbing a candidate
    pub probability: f64,
    /// Standard deviation of the Gaussian noise
    pub sigma: f64,
}

impl GaussianMutation {
    /// Create a new Gaussian mutation
    ///
    /// # Panics
    /// Panics if `probability` is outside [0, 1] or `sigma` is not positive
    pub fn new(probability: f64, sigma: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Mutation probability must be in [0, 1]"
        );
        assert!(
            sigma.is_finite() && sigma > 0.0,
            "Sigma must be positive and finite"
        );
        Self { probability, sigma }
    }

    /// Fallible constructor for user-supplied parameters
    pub fn try_new(probability: f64, sigma: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "mutation probability must be in [0, 1], got {probability}"
            )));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "mutation scale must be positive and finite, got {sigma}"
            )));
        }
        Ok(Self { probability, sigma })
    }
}

impl Default for GaussianMutation {
    fn default() -> Self {
        Self::new(0.2, 0.1)
    }
}

impl MutationOperator for GaussianMutation {
    fn mutate<R: Rng>(&self, candidate: Candidate, bounds: &Bounds, rng: &mut R) -> Candidate {
        let mut x = candidate;
        if rng.gen::<f64>() < self.probability {
            let z: f64 = rng.sample(StandardNormal);
            x += self.sigma * z;
        }
        bounds.clamp(x)
    }
}
