//! JSON-driven experiment definitions

use std::fs;
use std::path::Path;

use kde_distributions::DistributionSpec;
use kde_estimator::{EstimatorConfig, KernelDensityEstimator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::simulate::{Simulation, DEFAULT_ITERATIONS};
use crate::types::{ResultTable, TrialLabels};

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

/// One benchmark run: a ground-truth distribution, an estimator
/// configuration and the sample sizes to try
///
/// ```json
/// {
///   "distribution": { "kind": "gamma", "shape": 2.0 },
///   "estimator": { "bandwidth": "scott", "bound_correction": true },
///   "sizes": [100, 1000],
///   "iterations": 50,
///   "seed": 7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub distribution: DistributionSpec,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    /// Overrides the estimator label derived from the configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimator_name: Option<String>,
    pub sizes: Vec<usize>,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    pub fn new(distribution: DistributionSpec, estimator: EstimatorConfig, sizes: Vec<usize>) -> Self {
        Self {
            distribution,
            estimator,
            estimator_name: None,
            sizes,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Row labels for this experiment
    pub fn labels(&self) -> TrialLabels {
        let estimator = self
            .estimator_name
            .clone()
            .unwrap_or_else(|| self.estimator.label());
        TrialLabels::new(
            self.distribution.name(),
            estimator,
            self.estimator.bandwidth.name(),
        )
    }

    /// The configured loop, without binding distribution or estimator
    pub fn simulation(&self) -> Simulation {
        let simulation = Simulation::new(self.labels())
            .with_sizes(self.sizes.clone())
            .with_iterations(self.iterations);
        match self.seed {
            Some(seed) => simulation.with_seed(seed),
            None => simulation,
        }
    }

    /// Bind the distribution, build the estimator and run the loop
    pub fn run(&self) -> Result<ResultTable> {
        let (sampler, truth) = self.distribution.bind()?;
        let estimator = KernelDensityEstimator::new(self.estimator.clone())?;
        debug!(
            distribution = self.distribution.name(),
            estimator = %estimator.name(),
            "Running experiment"
        );
        Ok(self.simulation().run(&sampler, &truth, &estimator)?)
    }

    /// Same as [`ExperimentConfig::run`] on the rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Result<ResultTable> {
        let (sampler, truth) = self.distribution.bind()?;
        let estimator = KernelDensityEstimator::new(self.estimator.clone())?;
        Ok(self.simulation().run_parallel(&sampler, &truth, &estimator)?)
    }
}
