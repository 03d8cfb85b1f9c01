//! Collaborator traits for the benchmark loop
//!
//! The loop composes three opaque collaborators: something that draws
//! samples, something that evaluates the ground-truth density, and the
//! density estimator under test. Each trait has a blanket implementation
//! for plain closures so ad-hoc collaborators need no wrapper type.

use rand::RngCore;

use crate::{DensityEstimate, Result};

/// Draws i.i.d. samples from a fixed distribution
pub trait Sampler {
    /// Draw `size` values using `rng` as the randomness source
    fn sample(&self, size: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>>;
}

/// Evaluates a density function pointwise
pub trait DensityFunction {
    /// Evaluate the density at every point of `grid`
    ///
    /// The output has the same length as `grid`.
    fn density(&self, grid: &[f64]) -> Result<Vec<f64>>;
}

/// Estimates a density from a sample
pub trait DensityEstimator {
    /// Estimate the density of `sample`, returning the grid it was evaluated on
    fn estimate(&self, sample: &[f64]) -> Result<DensityEstimate>;
}

impl<F> Sampler for F
where
    F: Fn(usize, &mut dyn RngCore) -> Result<Vec<f64>>,
{
    fn sample(&self, size: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        self(size, rng)
    }
}

impl<F> DensityFunction for F
where
    F: Fn(&[f64]) -> Result<Vec<f64>>,
{
    fn density(&self, grid: &[f64]) -> Result<Vec<f64>> {
        self(grid)
    }
}

impl<F> DensityEstimator for F
where
    F: Fn(&[f64]) -> Result<DensityEstimate>,
{
    fn estimate(&self, sample: &[f64]) -> Result<DensityEstimate> {
        self(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn draw<S: Sampler>(sampler: &S, size: usize) -> Result<Vec<f64>> {
        let mut rng = StdRng::seed_from_u64(7);
        sampler.sample(size, &mut rng)
    }

    #[test]
    fn test_closure_sampler() {
        let uniform = |size: usize, rng: &mut dyn RngCore| -> Result<Vec<f64>> {
            Ok((0..size).map(|_| rng.gen::<f64>()).collect())
        };
        let values = draw(&uniform, 16).unwrap();
        assert_eq!(values.len(), 16);
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_closure_density_and_estimator() {
        let flat = |grid: &[f64]| -> Result<Vec<f64>> { Ok(vec![1.0; grid.len()]) };
        assert_eq!(flat.density(&[0.0, 0.5, 1.0]).unwrap(), vec![1.0; 3]);

        let failing = |_sample: &[f64]| -> Result<DensityEstimate> {
            Err(Error::InvalidInput("no estimate".to_string()))
        };
        assert!(failing.estimate(&[1.0, 2.0]).is_err());
    }
}
