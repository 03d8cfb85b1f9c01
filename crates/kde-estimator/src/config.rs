//! Estimator configuration

use kde_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Bandwidth selection method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandwidthMethod {
    /// Silverman's rule of thumb: `0.9 · min(σ, IQR / 1.34) · n^(-1/5)`
    Silverman,

    /// Scott's rule: `1.06 · σ · n^(-1/5)`
    Scott,

    /// A fixed bandwidth, independent of the sample
    Fixed(f64),
}

impl BandwidthMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Silverman => "silverman",
            Self::Scott => "scott",
            Self::Fixed(_) => "fixed",
        }
    }
}

impl Default for BandwidthMethod {
    fn default() -> Self {
        Self::Silverman
    }
}

/// Every option recognised by [`crate::KernelDensityEstimator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Bandwidth selection method (default: Silverman)
    pub bandwidth: BandwidthMethod,

    /// Number of evaluation points (default: 256, at least 2)
    pub grid_len: usize,

    /// Extend the grid past the observed range (default: true)
    ///
    /// Ignored when `bound_correction` is set or `custom_limits` are given.
    pub extend: bool,

    /// Reflect kernel mass at the grid edges back into the domain
    /// (default: false)
    pub bound_correction: bool,

    /// Use locally varying bandwidths (default: false)
    ///
    /// Local bandwidths follow Abramson's square-root law around a fixed
    /// bandwidth pilot estimate.
    pub adaptive: bool,

    /// Extension on each side in units of the sample standard deviation
    /// (default: 0.5)
    pub extend_factor: f64,

    /// Multiplier applied to the selected bandwidth (default: 1.0)
    pub bandwidth_factor: f64,

    /// Report the bandwidth in [`kde_core::DensityEstimate::bandwidth`]
    /// (default: false)
    pub return_bandwidth: bool,

    /// Explicit `(lower, upper)` grid limits overriding extension
    /// (default: none)
    pub custom_limits: Option<(f64, f64)>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            bandwidth: BandwidthMethod::Silverman,
            grid_len: 256,
            extend: true,
            bound_correction: false,
            adaptive: false,
            extend_factor: 0.5,
            bandwidth_factor: 1.0,
            return_bandwidth: false,
            custom_limits: None,
        }
    }
}

impl EstimatorConfig {
    /// Check that every option is usable
    pub fn validate(&self) -> Result<()> {
        if self.grid_len < 2 {
            return Err(Error::InvalidParameter(format!(
                "grid_len must be at least 2, got {}",
                self.grid_len
            )));
        }
        if let BandwidthMethod::Fixed(h) = self.bandwidth {
            if !(h.is_finite() && h > 0.0) {
                return Err(Error::InvalidParameter(format!(
                    "fixed bandwidth must be positive, got {h}"
                )));
            }
        }
        if !(self.bandwidth_factor.is_finite() && self.bandwidth_factor > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "bandwidth_factor must be positive, got {}",
                self.bandwidth_factor
            )));
        }
        if !(self.extend_factor.is_finite() && self.extend_factor >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "extend_factor must be non-negative, got {}",
                self.extend_factor
            )));
        }
        if let Some((lower, upper)) = self.custom_limits {
            if !(lower.is_finite() && upper.is_finite() && lower < upper) {
                return Err(Error::InvalidParameter(format!(
                    "custom_limits must be finite with lower < upper, got ({lower}, {upper})"
                )));
            }
        }
        Ok(())
    }

    /// Short label describing the estimator variant, e.g. `"kde_bounded_adaptive"`
    pub fn label(&self) -> String {
        let mut label = String::from("kde");
        if self.bound_correction {
            label.push_str("_bounded");
        }
        if self.adaptive {
            label.push_str("_adaptive");
        }
        label
    }
}
