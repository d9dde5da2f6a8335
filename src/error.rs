//! Error types for blend-ga
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Selection was asked to pick from an empty pool
    #[error("Selection failed: {0}")]
    SelectionFailed(String),

    /// Invalid operator configuration
    #[error("Invalid operator configuration: {0}")]
    InvalidConfiguration(String),
}

/// Error reported by a progress observer or a history renderer.
///
/// These never abort a run; the engine logs and drops them.
#[derive(Debug, Error)]
pub enum ObserverError {
    /// IO error while writing progress or a chart
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering is not possible for the given input
    #[error("Render failed: {0}")]
    Render(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Fitness evaluation produced an unusable value
    #[error("Fitness evaluation failed: {0}")]
    FitnessEvaluation(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
