//! Accuracy and cost benchmark loop for density estimators
//!
//! Draws repeated samples from a known distribution, times an estimator on
//! each one and scores the estimate by its integrated squared error (ISE)
//! against the true density, evaluated on the estimator's own grid.
//!
//! The loop works with anything implementing the collaborator traits of
//! [`kde_core`], including plain closures, so estimators other than the
//! bundled [`kde_estimator::KernelDensityEstimator`] can be benchmarked.
//!
//! # Example
//!
//! ```rust
//! use kde_distributions::DistributionSpec;
//! use kde_estimator::KernelDensityEstimator;
//! use kde_simulation::{Simulation, TrialLabels};
//!
//! let (sampler, truth) = DistributionSpec::gamma(2.0, 1.0).bind().unwrap();
//! let estimator = KernelDensityEstimator::default();
//!
//! let table = Simulation::new(TrialLabels::new("gamma", "kde", "silverman"))
//!     .with_sizes(vec![50, 100])
//!     .with_iterations(5)
//!     .with_seed(42)
//!     .run(&sampler, &truth, &estimator)
//!     .unwrap();
//!
//! assert_eq!(table.len(), 10);
//! for summary in table.summarize() {
//!     println!("{summary}");
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: adds [`Simulation::run_parallel`] and evaluates estimator
//!   grids on rayon.

pub mod config;
pub mod error;
pub mod simulate;
pub mod types;

pub use config::ExperimentConfig;
pub use error::{Error, Result};
pub use simulate::{simulate, Simulation, DEFAULT_ITERATIONS};
pub use types::{ResultTable, SizeSummary, TrialLabels, TrialResult, COLUMNS};
