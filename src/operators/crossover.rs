//! Crossover operators

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::bounds::Bounds;
use crate::genome::candidate::Candidate;
use crate::operators::traits::CrossoverOperator;

/// Blend crossover
///
/// Children are the weighted averages
/// `c1 = α·p1 + (1-α)·p2` and `c2 = α·p2 + (1-α)·p1`, clamped to the domain.
/// Deterministic: no random draws are consumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendCrossover {
    /// Weight given to the "own" parent, in [0, 1]
    pub alpha: f64,
}

impl BlendCrossover {
    /// Create a new blend crossover
    ///
    /// # Panics
    /// Panics if `alpha` is outside [0, 1]
    pub fn new(alpha: f64) -> Self {
        assert!((0.0..=1.0).contains(&alpha), "Alpha must be in [0, 1]");
        Self { alpha }
    }

    /// Fallible constructor for user-supplied blend factors
    pub fn try_new(alpha: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "alpha must be in [0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    /// Blend two parents without touching any random stream
    pub fn blend(&self, parent1: Candidate, parent2: Candidate, bounds: &Bounds) -> (Candidate, Candidate) {
        let c1 = self.alpha * parent1 + (1.0 - self.alpha) * parent2;
        let c2 = self.alpha * parent2 + (1.0 - self.alpha) * parent1;
        (bounds.clamp(c1), bounds.clamp(c2))
    }
}

impl Default for BlendCrossover {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl CrossoverOperator for BlendCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: Candidate,
        parent2: Candidate,
        bounds: &Bounds,
        _rng: &mut R,
    ) -> (Candidate, Candidate) {
        self.blend(parent1, parent2, bounds)
    }
}
