//! Bound distributions: validated samplers and closed-form densities
//!
//! Binding a [`DistributionSpec`] constructs the `rand_distr` sampler and the
//! `statrs` density once. Both halves share the same parameters, so the
//! density used for scoring always matches the distribution samples come from.

use std::sync::Arc;

use kde_core::{DensityFunction, Result, Sampler};
use rand::RngCore;
use rand_distr::Distribution as _;
use statrs::distribution::Continuous;

use crate::mixture::GaussianMixture;
use crate::spec::DistributionSpec;

/// Sampling and density primitives for one specification
#[derive(Debug, Clone)]
enum Model {
    Mixture {
        components: Vec<(rand_distr::Normal<f64>, statrs::distribution::Normal)>,
        mixture: GaussianMixture,
    },
    Gamma(rand_distr::Gamma<f64>, statrs::distribution::Gamma),
    LogNormal(rand_distr::LogNormal<f64>, statrs::distribution::LogNormal),
    Beta(rand_distr::Beta<f64>, statrs::distribution::Beta),
}

impl Model {
    fn build(spec: &DistributionSpec) -> Result<Self> {
        use kde_core::Error;

        match spec {
            DistributionSpec::GaussianMixture(mixture) => {
                let components = mixture
                    .means()
                    .iter()
                    .zip(mixture.scales())
                    .map(|(&mean, &scale)| -> Result<_> {
                        let sampler = rand_distr::Normal::new(mean, scale)
                            .map_err(|e| Error::distribution("normal", e))?;
                        let density = statrs::distribution::Normal::new(mean, scale)
                            .map_err(|e| Error::distribution("normal", e))?;
                        Ok((sampler, density))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Mixture {
                    components,
                    mixture: mixture.clone(),
                })
            }
            &DistributionSpec::Gamma { shape, scale } => {
                let sampler = rand_distr::Gamma::new(shape, scale)
                    .map_err(|e| Error::distribution("gamma", e))?;
                let density = statrs::distribution::Gamma::new(shape, 1.0 / scale)
                    .map_err(|e| Error::distribution("gamma", e))?;
                Ok(Self::Gamma(sampler, density))
            }
            &DistributionSpec::LogNormal { scale } => {
                let sampler = rand_distr::LogNormal::new(0.0, scale)
                    .map_err(|e| Error::distribution("logn", e))?;
                let density = statrs::distribution::LogNormal::new(0.0, scale)
                    .map_err(|e| Error::distribution("logn", e))?;
                Ok(Self::LogNormal(sampler, density))
            }
            &DistributionSpec::Beta { a, b } => {
                let sampler =
                    rand_distr::Beta::new(a, b).map_err(|e| Error::distribution("beta", e))?;
                let density = statrs::distribution::Beta::new(a, b)
                    .map_err(|e| Error::distribution("beta", e))?;
                Ok(Self::Beta(sampler, density))
            }
        }
    }

    fn sample(&self, size: usize, rng: &mut dyn RngCore) -> Vec<f64> {
        match self {
            Self::Mixture {
                components,
                mixture,
            } => {
                let counts = mixture.component_counts(size);
                let mut values = Vec::with_capacity(counts.iter().sum());
                for ((normal, _), count) in components.iter().zip(counts) {
                    values.extend((0..count).map(|_| normal.sample(&mut *rng)));
                }
                values
            }
            Self::Gamma(gamma, _) => (0..size).map(|_| gamma.sample(&mut *rng)).collect(),
            Self::LogNormal(logn, _) => (0..size).map(|_| logn.sample(&mut *rng)).collect(),
            Self::Beta(beta, _) => (0..size).map(|_| beta.sample(&mut *rng)).collect(),
        }
    }

    fn pdf(&self, x: f64) -> f64 {
        match self {
            Self::Mixture {
                components,
                mixture,
            } => {
                let weights = mixture.weights();
                let total: f64 = weights.iter().sum();
                let weighted: f64 = components
                    .iter()
                    .zip(weights)
                    .map(|((_, normal), &w)| w * normal.pdf(x))
                    .sum();
                weighted / total
            }
            Self::Gamma(_, gamma) => {
                if x < 0.0 {
                    0.0
                } else {
                    gamma.pdf(x)
                }
            }
            Self::LogNormal(_, logn) => {
                if x <= 0.0 {
                    0.0
                } else {
                    logn.pdf(x)
                }
            }
            Self::Beta(_, beta) => {
                if !(0.0..=1.0).contains(&x) {
                    0.0
                } else {
                    beta.pdf(x)
                }
            }
        }
    }
}

/// A distribution whose parameters have been checked and bound
///
/// Implements both [`Sampler`] and [`DensityFunction`]; use
/// [`BoundDistribution::into_pair`] to hand the two capabilities to
/// different owners.
#[derive(Debug, Clone)]
pub struct BoundDistribution {
    spec: DistributionSpec,
    model: Arc<Model>,
}

impl BoundDistribution {
    /// Validate `spec` and construct its primitives
    ///
    /// # Errors
    /// Returns [`kde_core::Error::Distribution`] if a primitive rejects the
    /// parameters (e.g. a non-positive shape).
    pub fn new(spec: DistributionSpec) -> Result<Self> {
        let model = Model::build(&spec)?;
        Ok(Self {
            spec,
            model: Arc::new(model),
        })
    }

    pub fn spec(&self) -> &DistributionSpec {
        &self.spec
    }

    /// Distribution label used in result tables
    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    pub fn sampler(&self) -> DistributionSampler {
        DistributionSampler {
            model: Arc::clone(&self.model),
        }
    }

    pub fn true_density(&self) -> TrueDensity {
        TrueDensity {
            model: Arc::clone(&self.model),
        }
    }

    /// Split into a sampler and a density evaluator sharing the same parameters
    pub fn into_pair(self) -> (DistributionSampler, TrueDensity) {
        let density = TrueDensity {
            model: Arc::clone(&self.model),
        };
        (DistributionSampler { model: self.model }, density)
    }
}

impl Sampler for BoundDistribution {
    fn sample(&self, size: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        Ok(self.model.sample(size, rng))
    }
}

impl DensityFunction for BoundDistribution {
    fn density(&self, grid: &[f64]) -> Result<Vec<f64>> {
        Ok(grid.iter().map(|&x| self.model.pdf(x)).collect())
    }
}

/// Sampling half of a bound distribution
#[derive(Debug, Clone)]
pub struct DistributionSampler {
    model: Arc<Model>,
}

impl Sampler for DistributionSampler {
    fn sample(&self, size: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        Ok(self.model.sample(size, rng))
    }
}

/// Density half of a bound distribution
#[derive(Debug, Clone)]
pub struct TrueDensity {
    model: Arc<Model>,
}

impl TrueDensity {
    /// Density at a single point
    pub fn pdf(&self, x: f64) -> f64 {
        self.model.pdf(x)
    }
}

impl DensityFunction for TrueDensity {
    fn density(&self, grid: &[f64]) -> Result<Vec<f64>> {
        Ok(grid.iter().map(|&x| self.model.pdf(x)).collect())
    }
}

/// Bind `spec`, returning its sampler and true density
pub fn bind(spec: DistributionSpec) -> Result<(DistributionSampler, TrueDensity)> {
    BoundDistribution::new(spec).map(BoundDistribution::into_pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kde_core::integrate::{linspace, trapezoid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[test]
    fn test_mixture_sample_concatenates_components_in_order() {
        let spec = DistributionSpec::gaussian_mixture(
            vec![-100.0, 100.0],
            vec![1.0, 1.0],
            Some(vec![0.25, 0.75]),
        )
        .unwrap();
        let (sampler, _) = bind(spec).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let values = sampler.sample(200, &mut rng).unwrap();

        assert_eq!(values.len(), 200);
        assert!(values[..50].iter().all(|&v| v < 0.0));
        assert!(values[50..].iter().all(|&v| v > 0.0));
    }

    #[test]
    fn test_mixture_density_is_weighted_average() {
        let spec = DistributionSpec::gaussian_mixture(
            vec![0.0, 3.0],
            vec![1.0, 0.5],
            Some(vec![0.4, 0.6]),
        )
        .unwrap();
        let (_, density) = bind(spec).unwrap();

        let n0 = statrs::distribution::Normal::new(0.0, 1.0).unwrap();
        let n1 = statrs::distribution::Normal::new(3.0, 0.5).unwrap();
        for &x in &[-1.0, 0.0, 1.5, 3.0, 4.2] {
            let expected = 0.4 * n0.pdf(x) + 0.6 * n1.pdf(x);
            assert_relative_eq!(density.pdf(x), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let cases = [
            (
                DistributionSpec::gaussian_mixture(vec![-2.0, 2.0], vec![1.0, 1.0], None).unwrap(),
                (-12.0, 12.0),
            ),
            (DistributionSpec::gamma(3.0, 2.0), (0.0, 80.0)),
            (DistributionSpec::log_normal(0.5), (0.0, 30.0)),
            (DistributionSpec::beta(2.0, 5.0), (0.0, 1.0)),
        ];

        for (spec, (lo, hi)) in cases {
            let (_, density) = bind(spec.clone()).unwrap();
            let grid = linspace(lo, hi, 20_001);
            let values = density.density(&grid).unwrap();
            let area = trapezoid(&grid, &values).unwrap();
            assert_relative_eq!(area, 1.0, epsilon = 1e-3);
            assert!(values.iter().all(|v| *v >= 0.0), "{} density negative", spec.name());
        }
    }

    #[test]
    fn test_density_outside_support_is_zero() {
        let (_, gamma) = bind(DistributionSpec::gamma(2.0, 1.0)).unwrap();
        assert_eq!(gamma.pdf(-1.0), 0.0);

        let (_, logn) = bind(DistributionSpec::log_normal(1.0)).unwrap();
        assert_eq!(logn.pdf(0.0), 0.0);
        assert_eq!(logn.pdf(-3.0), 0.0);

        let (_, beta) = bind(DistributionSpec::beta(2.0, 2.0)).unwrap();
        assert_eq!(beta.pdf(-0.1), 0.0);
        assert_eq!(beta.pdf(1.1), 0.0);
    }

    #[test]
    fn test_sample_moments() {
        let mut rng = StdRng::seed_from_u64(1);

        let (gamma, _) = bind(DistributionSpec::gamma(2.0, 3.0)).unwrap();
        let values = gamma.sample(20_000, &mut rng).unwrap();
        assert_eq!(values.len(), 20_000);
        assert_relative_eq!(mean(&values), 6.0, epsilon = 0.2);

        let (beta, _) = bind(DistributionSpec::beta(2.0, 6.0)).unwrap();
        let values = beta.sample(20_000, &mut rng).unwrap();
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
        // Beta(a, b) mean a / (a + b); Beta(b, b) would centre on 0.5
        assert_relative_eq!(mean(&values), 0.25, epsilon = 0.01);

        let (logn, _) = bind(DistributionSpec::log_normal(0.5)).unwrap();
        let values = logn.sample(20_000, &mut rng).unwrap();
        assert!(values.iter().all(|v| *v > 0.0));
        assert_relative_eq!(mean(&values), (0.125f64).exp(), epsilon = 0.05);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let bound = BoundDistribution::new(DistributionSpec::log_normal(1.0)).unwrap();
        let a = bound.sample(64, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = bound.sample(64, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_true_density_is_deterministic() {
        let bound = BoundDistribution::new(
            DistributionSpec::gaussian_mixture(vec![0.0, 1.0], vec![0.3, 2.0], Some(vec![0.2, 0.8]))
                .unwrap(),
        )
        .unwrap();
        let grid = linspace(-5.0, 5.0, 512);
        let first = bound.density(&grid).unwrap();
        let second = bound.true_density().density(&grid).unwrap();
        assert!(first
            .iter()
            .zip(&second)
            .all(|(a, b)| a.to_bits() == b.to_bits()));
    }
}
