//! Evolutionary algorithms
//!
//! This module provides the generational blend-crossover GA.

pub mod blend_ga;

pub mod prelude {
    pub use super::blend_ga::*;
}
