//! Configurable Gaussian kernel density estimator
//!
//! This crate provides the estimator adapter used by the benchmark harness:
//! a single [`EstimatorConfig`] enumerates every option, and
//! [`KernelDensityEstimator`] turns it into a
//! [`kde_core::DensityEstimator`] mapping a sample to `(grid, density)`.
//!
//! # Options
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `bandwidth` | Silverman | bandwidth rule or fixed value |
//! | `grid_len` | 256 | evaluation points |
//! | `extend` | true | widen the grid past the sample range |
//! | `bound_correction` | false | reflect kernels at the grid edges |
//! | `adaptive` | false | Abramson local bandwidths |
//! | `extend_factor` | 0.5 | widening, in standard deviations |
//! | `bandwidth_factor` | 1.0 | bandwidth multiplier |
//! | `return_bandwidth` | false | report the bandwidth used |
//! | `custom_limits` | none | explicit grid limits |
//!
//! # Example
//!
//! ```rust
//! use kde_core::DensityEstimator;
//! use kde_estimator::{BandwidthMethod, EstimatorBuilder};
//!
//! let estimator = EstimatorBuilder::new()
//!     .bandwidth(BandwidthMethod::Scott)
//!     .grid_len(64)
//!     .build()
//!     .unwrap();
//!
//! let sample = [0.1, 0.4, 0.5, 0.9, 1.3, 1.4, 2.2];
//! let estimate = estimator.estimate(&sample).unwrap();
//! assert_eq!(estimate.grid.len(), 64);
//! ```
//!
//! With the `parallel` feature the grid is evaluated on rayon's thread pool.

pub mod bandwidth;
pub mod builder;
pub mod config;
pub mod estimator;
pub mod kernel;

pub use bandwidth::SampleSummary;
pub use builder::{bounded_estimator, default_estimator, EstimatorBuilder};
pub use config::{BandwidthMethod, EstimatorConfig};
pub use estimator::KernelDensityEstimator;
