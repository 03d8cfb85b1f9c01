//! Ground-truth distributions for density estimation benchmarks
//!
//! Each supported family pairs a random sampler with its exact density so an
//! estimate computed from a sample can be scored against the truth.
//!
//! | Identifier | Family | Parameters |
//! |------------|--------|------------|
//! | `gaussian` | Mixture of normals | means, scales, weights (default uniform) |
//! | `gamma` | Gamma | shape, scale (default 1) |
//! | `logn` | Log-normal, location 0 | scale (sigma of `ln X`) |
//! | `beta` | Beta | a, b |
//!
//! # Example
//!
//! ```rust
//! use kde_core::{DensityFunction, Sampler};
//! use kde_distributions::DistributionSpec;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let spec = DistributionSpec::gaussian_mixture(vec![-2.0, 2.0], vec![1.0, 1.0], None).unwrap();
//! let (sampler, density) = spec.bind().unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sample = sampler.sample(100, &mut rng).unwrap();
//! assert_eq!(sample.len(), 100);
//!
//! let values = density.density(&[-2.0, 0.0, 2.0]).unwrap();
//! assert!(values[0] > values[1]);
//! ```

pub mod mixture;
pub mod model;
pub mod scenarios;
pub mod spec;

pub use mixture::{GaussianMixture, MixtureParams, WEIGHT_SUM_TOLERANCE};
pub use model::{bind, BoundDistribution, DistributionSampler, TrueDensity};
pub use scenarios::{Scenario, Scenarios};
pub use spec::DistributionSpec;
