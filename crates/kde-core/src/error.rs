//! Error types for the KDE benchmark harness
//!
//! Provides a unified error type for all kde-bench crates.

use thiserror::Error;

/// Core error type for the benchmark harness
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two sequences that must line up element-wise have different lengths
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// A structural invariant of a parameter set does not hold
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A distribution primitive rejected its parameters
    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for two sequences of different lengths
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Wrap an error reported by an upstream distribution constructor
    pub fn distribution(name: &str, err: impl std::fmt::Display) -> Self {
        Self::Distribution(format!("{name}: {err}"))
    }
}
