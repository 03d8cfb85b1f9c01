//! Gaussian mixture parameters

use kde_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted deviation of the mixture weight sum from 1
///
/// Weights are compared with a tolerance rather than exactly, so weights
/// written as decimal fractions (e.g. `[0.1; 10]`) are accepted.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// A validated mixture of normal components
///
/// Construction checks that means, scales and weights have equal length,
/// scales are strictly positive, and weights are non-negative and sum to one.
/// Once built, the parameters cannot change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MixtureParams", into = "MixtureParams")]
pub struct GaussianMixture {
    means: Vec<f64>,
    scales: Vec<f64>,
    weights: Vec<f64>,
}

/// Unvalidated wire form of [`GaussianMixture`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixtureParams {
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
}

impl GaussianMixture {
    /// Create a mixture, defaulting to uniform weights when `weights` is `None`
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] if scales or weights differ in length from means
    /// - [`Error::InvariantViolation`] if a weight is negative or the weights
    ///   do not sum to one within [`WEIGHT_SUM_TOLERANCE`]
    /// - [`Error::InvalidParameter`] for an empty mixture or a non-positive scale
    pub fn new(means: Vec<f64>, scales: Vec<f64>, weights: Option<Vec<f64>>) -> Result<Self> {
        if means.is_empty() {
            return Err(Error::InvalidParameter(
                "Gaussian mixture needs at least one component".to_string(),
            ));
        }
        if scales.len() != means.len() {
            return Err(Error::size_mismatch(means.len(), scales.len(), "mixture scales"));
        }

        let weights = match weights {
            Some(w) => w,
            None => vec![1.0 / means.len() as f64; means.len()],
        };
        if weights.len() != means.len() {
            return Err(Error::size_mismatch(means.len(), weights.len(), "mixture weights"));
        }

        if let Some(&w) = weights.iter().find(|w| !(**w >= 0.0)) {
            return Err(Error::InvariantViolation(format!(
                "mixture weights must be non-negative, got {w}"
            )));
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::InvariantViolation(format!(
                "mixture weights must sum to 1, got {total}"
            )));
        }

        if let Some(&s) = scales.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
            return Err(Error::InvalidParameter(format!(
                "mixture scales must be positive and finite, got {s}"
            )));
        }
        if means.iter().any(|m| !m.is_finite()) {
            return Err(Error::non_finite("mixture means"));
        }

        Ok(Self {
            means,
            scales,
            weights,
        })
    }

    /// Equal-weight mixture
    pub fn uniform(means: Vec<f64>, scales: Vec<f64>) -> Result<Self> {
        Self::new(means, scales, None)
    }

    /// Single normal component
    pub fn normal(mean: f64, scale: f64) -> Result<Self> {
        Self::new(vec![mean], vec![scale], None)
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Number of draws each component contributes to a sample of `size`
    ///
    /// Each count is `size * weight` rounded half to even, so the total may
    /// differ from `size` by a draw or two.
    pub fn component_counts(&self, size: usize) -> Vec<usize> {
        self.weights
            .iter()
            .map(|&w| (size as f64 * w).round_ties_even() as usize)
            .collect()
    }
}

impl TryFrom<MixtureParams> for GaussianMixture {
    type Error = Error;

    fn try_from(params: MixtureParams) -> Result<Self> {
        Self::new(params.means, params.scales, params.weights)
    }
}

impl From<GaussianMixture> for MixtureParams {
    fn from(mixture: GaussianMixture) -> Self {
        Self {
            means: mixture.means,
            scales: mixture.scales,
            weights: Some(mixture.weights),
        }
    }
}
