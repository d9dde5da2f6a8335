//! # blend-ga
//!
//! A real-valued genetic algorithm that maximizes a fitness function over a
//! bounded one-dimensional domain.
//!
//! ## Core Concepts
//!
//! - **Candidates** are plain `f64` values kept inside a closed [`Bounds`](genome::bounds::Bounds)
//! - **Operators** (tournament selection, blend crossover, Gaussian mutation) return new values and clamp them
//! - **Reproducibility**: every random draw comes from one caller-supplied stream
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blend_ga::prelude::*;
//!
//! let result = BlendGA::builder()
//!     .population_size(80)
//!     .generations(120)
//!     .crossover_rate(0.9)
//!     .mutation_scale(0.08)
//!     .elitism_count(2)
//!     .alpha(0.6)
//!     .seed(42)
//!     .fitness(SineWave::new())
//!     .build()?
//!     .run_seeded()?;
//!
//! println!("x = {:.6}, fitness = {:.6}", result.best_candidate, result.best_fitness);
//! # Ok::<(), blend_ga::error::EvolutionError>(())
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod observer;
pub mod operators;
pub mod plot;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::GaConfig;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::observer::*;
    pub use crate::operators::prelude::*;
    pub use crate::plot::*;
    pub use crate::population::prelude::*;
}
