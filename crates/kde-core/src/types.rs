//! Shared data types

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Output of a density estimator: a grid and the density evaluated on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityEstimate {
    /// Strictly increasing evaluation points
    pub grid: Vec<f64>,
    /// Estimated density at each grid point
    pub density: Vec<f64>,
    /// Bandwidth used, if the estimator was asked to report it
    pub bandwidth: Option<f64>,
}

impl DensityEstimate {
    /// Create an estimate, checking that grid and density line up
    pub fn new(grid: Vec<f64>, density: Vec<f64>) -> Result<Self> {
        if grid.len() != density.len() {
            return Err(Error::size_mismatch(
                grid.len(),
                density.len(),
                "density estimate",
            ));
        }
        Ok(Self {
            grid,
            density,
            bandwidth: None,
        })
    }

    /// Attach the bandwidth used to produce this estimate
    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Split into `(grid, density)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.grid, self.density)
    }
}
