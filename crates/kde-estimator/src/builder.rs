use kde_core::Result;

use crate::config::{BandwidthMethod, EstimatorConfig};
use crate::estimator::KernelDensityEstimator;

/// Builder for configuring and creating kernel density estimators.
///
/// Starts from [`EstimatorConfig::default`]; validation happens in
/// [`EstimatorBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct EstimatorBuilder {
    config: EstimatorConfig,
}

impl EstimatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bandwidth selection method.
    pub fn bandwidth(mut self, method: BandwidthMethod) -> Self {
        self.config.bandwidth = method;
        self
    }

    /// Sets the number of grid points.
    pub fn grid_len(mut self, grid_len: usize) -> Self {
        self.config.grid_len = grid_len;
        self
    }

    /// Enables or disables extension of the grid past the observed range.
    pub fn extend(mut self, extend: bool) -> Self {
        self.config.extend = extend;
        self
    }

    /// Sets the extension in units of the sample standard deviation.
    pub fn extend_factor(mut self, factor: f64) -> Self {
        self.config.extend_factor = factor;
        self
    }

    /// Enables reflection at the grid edges.
    pub fn bound_correction(mut self, enabled: bool) -> Self {
        self.config.bound_correction = enabled;
        self
    }

    /// Enables locally varying bandwidths.
    pub fn adaptive(mut self, enabled: bool) -> Self {
        self.config.adaptive = enabled;
        self
    }

    /// Scales the selected bandwidth.
    pub fn bandwidth_factor(mut self, factor: f64) -> Self {
        self.config.bandwidth_factor = factor;
        self
    }

    /// Reports the bandwidth alongside each estimate.
    pub fn return_bandwidth(mut self, enabled: bool) -> Self {
        self.config.return_bandwidth = enabled;
        self
    }

    /// Fixes the grid to `[lower, upper]`.
    pub fn limits(mut self, lower: f64, upper: f64) -> Self {
        self.config.custom_limits = Some((lower, upper));
        self
    }

    /// Returns the configuration built so far without validating it.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Builds the configured estimator.
    pub fn build(self) -> Result<KernelDensityEstimator> {
        KernelDensityEstimator::new(self.config)
    }
}

/// Convenience function for the default estimator: Silverman bandwidth,
/// 256 grid points, domain extended by half a standard deviation.
pub fn default_estimator() -> KernelDensityEstimator {
    KernelDensityEstimator::default()
}

/// Convenience function for an estimator with reflection at the observed
/// sample range, suited to bounded or positive supports.
pub fn bounded_estimator(bandwidth: BandwidthMethod) -> Result<KernelDensityEstimator> {
    EstimatorBuilder::new()
        .bandwidth(bandwidth)
        .bound_correction(true)
        .build()
}
