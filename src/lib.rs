//! # kde-bench
//!
//! Accuracy and cost benchmarking harness for kernel density estimators.
//!
//! The workspace is split into focused crates, re-exported here:
//!
//! - [`kde_core`]: collaborator traits, errors and the trapezoidal integrator
//! - [`kde_distributions`]: ground-truth samplers and densities
//! - [`kde_estimator`]: the configurable Gaussian KDE under test
//! - [`kde_simulation`]: the benchmark loop and its result tables
//!
//! # Quick Start
//!
//! ```rust
//! use kde_bench::prelude::*;
//!
//! let spec = DistributionSpec::gaussian_mixture(vec![-1.5, 1.5], vec![0.5, 0.5], None).unwrap();
//! let (sampler, truth) = spec.bind().unwrap();
//! let estimator = EstimatorBuilder::new().grid_len(128).build().unwrap();
//!
//! let table = simulate(&sampler, &truth, &estimator, TrialLabels::new("gaussian", "kde", "silverman"), &[100], 3).unwrap();
//! assert_eq!(table.len(), 3);
//! ```

pub use kde_core;
pub use kde_distributions;
pub use kde_estimator;
pub use kde_simulation;

/// Commonly used items
pub mod prelude {
    pub use kde_core::{
        integrate::{integrated_squared_error, linspace, trapezoid},
        DensityEstimate, DensityEstimator, DensityFunction, Sampler,
    };
    pub use kde_distributions::{DistributionSpec, GaussianMixture, Scenarios};
    pub use kde_estimator::{BandwidthMethod, EstimatorBuilder, EstimatorConfig, KernelDensityEstimator};
    pub use kde_simulation::{
        simulate, ExperimentConfig, ResultTable, Simulation, TrialLabels, TrialResult,
    };
}
