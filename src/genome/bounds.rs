//! Bounds for candidate values
//!
//! This module provides the closed interval every candidate lives in.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EvolutionError;

/// Lower end of the default search domain
pub const LOWER: f64 = -1.0;

/// Upper end of the default search domain
pub const UPPER: f64 = 2.0;

/// Closed interval `[min, max]` of admissible candidate values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if min > max
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min ({}) must be <= max ({})",
            min,
            max
        );
        Self { min, max }
    }

    /// Create bounds, rejecting empty, inverted or non-finite intervals
    pub fn try_new(min: f64, max: f64) -> Result<Self, EvolutionError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// The `[-1, 2]` domain the sine benchmark is defined on
    pub fn default_domain() -> Self {
        Self::new(LOWER, UPPER)
    }

    /// Check that the interval is usable as a search domain
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(EvolutionError::Configuration(format!(
                "bounds min ({}) must be < max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to be within bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Draw a value uniformly from the interval.
    ///
    /// Consumes exactly one draw from `rng`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::default_domain()
    }
}
