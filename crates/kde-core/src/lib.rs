//! Core traits and types for the KDE benchmark harness
//!
//! This crate holds the pieces every other kde-bench crate agrees on:
//!
//! - [`Error`] / [`Result`]: the shared error taxonomy
//! - [`integrate`]: trapezoidal integration used to score estimators
//! - [`Sampler`], [`DensityFunction`], [`DensityEstimator`]: the
//!   collaborator interfaces the benchmark loop is written against
//!
//! # Example
//!
//! ```rust
//! use kde_core::integrate::{linspace, trapezoid};
//!
//! let x = linspace(0.0, 1.0, 101);
//! let f: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
//! let area = trapezoid(&x, &f).unwrap();
//! assert!((area - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod integrate;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use integrate::{integrated_squared_error, linspace, trapezoid};
pub use traits::{DensityEstimator, DensityFunction, Sampler};
pub use types::DensityEstimate;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
