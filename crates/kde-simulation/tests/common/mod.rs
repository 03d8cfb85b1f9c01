//! Shared utilities for integration tests

#![allow(dead_code)]

use std::sync::Mutex;

use kde_core::{DensityEstimate, DensityEstimator, DensityFunction, Result};
use kde_simulation::TrialLabels;

pub use approx::assert_relative_eq;

pub fn labels() -> TrialLabels {
    TrialLabels::new("gaussian", "kde", "silverman")
}

/// Estimator wrapper that records every grid it returns
pub struct RecordingEstimator<E> {
    inner: E,
    pub grids: Mutex<Vec<Vec<f64>>>,
    pub samples: Mutex<Vec<Vec<f64>>>,
}

impl<E> RecordingEstimator<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            grids: Mutex::new(Vec::new()),
            samples: Mutex::new(Vec::new()),
        }
    }

    pub fn grids(&self) -> Vec<Vec<f64>> {
        self.grids.lock().unwrap().clone()
    }

    pub fn samples(&self) -> Vec<Vec<f64>> {
        self.samples.lock().unwrap().clone()
    }
}

impl<E: DensityEstimator> DensityEstimator for RecordingEstimator<E> {
    fn estimate(&self, sample: &[f64]) -> Result<DensityEstimate> {
        let estimate = self.inner.estimate(sample)?;
        self.samples.lock().unwrap().push(sample.to_vec());
        self.grids.lock().unwrap().push(estimate.grid.clone());
        Ok(estimate)
    }
}

/// True density wrapper that records every grid it is evaluated on
pub struct RecordingDensity<D> {
    inner: D,
    pub grids: Mutex<Vec<Vec<f64>>>,
}

impl<D> RecordingDensity<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            grids: Mutex::new(Vec::new()),
        }
    }

    pub fn grids(&self) -> Vec<Vec<f64>> {
        self.grids.lock().unwrap().clone()
    }
}

impl<D: DensityFunction> DensityFunction for RecordingDensity<D> {
    fn density(&self, grid: &[f64]) -> Result<Vec<f64>> {
        self.grids.lock().unwrap().push(grid.to_vec());
        self.inner.density(grid)
    }
}

/// Drop the timing column so two runs can be compared row by row
pub fn without_timing(table: &kde_simulation::ResultTable) -> Vec<(usize, usize, f64)> {
    table
        .iter()
        .map(|row| (row.size, row.iteration, row.integrated_squared_error))
        .collect()
}
