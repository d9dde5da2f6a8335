//! Benchmark fitness functions

use std::f64::consts::PI;

use crate::fitness::traits::Fitness;
use crate::genome::bounds::Bounds;
use crate::genome::candidate::Candidate;

/// Sine wave: f(x) = x·sin(10πx) + 1
///
/// Highly multimodal on `[-1, 2]`; the global maximum sits near `x ≈ 1.85`
/// with `f ≈ 2.85`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SineWave;

impl SineWave {
    /// Create the benchmark
    pub fn new() -> Self {
        Self
    }

    /// Domain the benchmark is meant to be searched on
    pub fn bounds(&self) -> Bounds {
        Bounds::default_domain()
    }
}

impl Fitness for SineWave {
    fn evaluate(&self, x: Candidate) -> f64 {
        x * (10.0 * PI * x).sin() + 1.0
    }

    fn name(&self) -> &str {
        "SineWave"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_wave_known_values() {
        let f = SineWave::new();
        assert!((f.evaluate(0.0) - 1.0).abs() < 1e-12);
        // sin(10π) == 0
        assert!((f.evaluate(1.0) - 1.0).abs() < 1e-12);
        // sin(10π · 0.05) == 1
        assert!((f.evaluate(0.05) - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_sine_wave_near_optimum() {
        let f = SineWave::new();
        let x = 1.85;
        assert!(f.evaluate(x) > 2.8);
    }

    #[test]
    fn test_sine_wave_is_pure() {
        let f = SineWave::new();
        for i in 0..100 {
            let x = -1.0 + 3.0 * (i as f64) / 99.0;
            assert_eq!(f.evaluate(x), f.evaluate(x));
        }
    }

    #[test]
    fn test_sine_wave_bounds() {
        assert_eq!(SineWave::new().bounds(), Bounds::new(-1.0, 2.0));
        assert_eq!(SineWave::new().name(), "SineWave");
    }
}
