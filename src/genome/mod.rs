//! Candidate representation
//!
//! This module provides the scalar candidate type and its bounded domain.

pub mod bounds;
pub mod candidate;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::candidate::*;
}
