//! The benchmark loop
//!
//! For every requested sample size, and every iteration within it, the loop
//! draws a sample from the ground-truth distribution, times a single call of
//! the estimator under test, evaluates the true density on the estimator's
//! own grid and scores the estimate by integrated squared error.
//!
//! Rows come out size-major, iteration-minor. Each trial owns an RNG seeded
//! from the run seed plus the trial's position in that order, so a trial's
//! sample does not depend on how many trials ran before it or on which thread
//! it ran.

use std::time::Instant;

use kde_core::integrate::integrated_squared_error;
use kde_core::{DensityEstimator, DensityFunction, Result, Sampler};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::types::{ResultTable, TrialLabels, TrialResult};

/// Iterations per sample size unless configured otherwise
pub const DEFAULT_ITERATIONS: usize = 200;

/// Position of one trial in the canonical row order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Trial {
    index: u64,
    size: usize,
    iteration: usize,
}

/// Configurable benchmark run
#[derive(Debug, Clone)]
pub struct Simulation {
    labels: TrialLabels,
    sizes: Vec<usize>,
    iterations: usize,
    seed: Option<u64>,
}

impl Simulation {
    /// Create a run with no sizes and [`DEFAULT_ITERATIONS`] iterations
    pub fn new(labels: TrialLabels) -> Self {
        Self {
            labels,
            sizes: Vec::new(),
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }

    /// Set the sample sizes, run in the given order
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Set the number of iterations per size
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn labels(&self) -> &TrialLabels {
        &self.labels
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of rows a successful run produces
    pub fn trial_count(&self) -> usize {
        self.sizes.len() * self.iterations
    }

    fn trials(&self) -> impl Iterator<Item = Trial> + '_ {
        self.sizes
            .iter()
            .flat_map(move |&size| (1..=self.iterations).map(move |iteration| (size, iteration)))
            .enumerate()
            .map(|(index, (size, iteration))| Trial {
                index: index as u64,
                size,
                iteration,
            })
    }

    fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| thread_rng().gen())
    }

    /// Run every trial in order, stopping at the first error
    #[instrument(
        skip(self, sampler, truth, estimator),
        fields(
            distribution = %self.labels.distribution,
            estimator = %self.labels.estimator,
            sizes = ?self.sizes,
            niter = self.iterations
        )
    )]
    pub fn run<S, D, E>(&self, sampler: &S, truth: &D, estimator: &E) -> Result<ResultTable>
    where
        S: Sampler + ?Sized,
        D: DensityFunction + ?Sized,
        E: DensityEstimator + ?Sized,
    {
        let seed = self.resolve_seed();
        debug!(seed, "Starting simulation with {} trials", self.trial_count());

        let mut table = ResultTable::with_capacity(self.trial_count());
        let mut current_size = None;
        for trial in self.trials() {
            if current_size != Some(trial.size) {
                debug!(size = trial.size, "Starting size block");
                current_size = Some(trial.size);
            }
            table.push(run_trial(
                &self.labels,
                trial,
                seed,
                sampler,
                truth,
                estimator,
            )?);
        }

        debug!(rows = table.len(), "Simulation completed");
        Ok(table)
    }

    /// Run trials on the rayon thread pool
    ///
    /// Rows are returned in the same order as [`Simulation::run`] and, for
    /// the same seed, match it in every column except `elapsed_seconds`.
    /// When several trials fail, which error is returned is unspecified.
    #[cfg(feature = "parallel")]
    #[instrument(
        skip(self, sampler, truth, estimator),
        fields(
            distribution = %self.labels.distribution,
            estimator = %self.labels.estimator,
            sizes = ?self.sizes,
            niter = self.iterations
        )
    )]
    pub fn run_parallel<S, D, E>(&self, sampler: &S, truth: &D, estimator: &E) -> Result<ResultTable>
    where
        S: Sampler + Sync + ?Sized,
        D: DensityFunction + Sync + ?Sized,
        E: DensityEstimator + Sync + ?Sized,
    {
        let seed = self.resolve_seed();
        debug!(seed, "Starting parallel simulation with {} trials", self.trial_count());

        let trials: Vec<Trial> = self.trials().collect();
        let rows = trials
            .par_iter()
            .map(|&trial| run_trial(&self.labels, trial, seed, sampler, truth, estimator))
            .collect::<Result<Vec<_>>>()?;

        debug!(rows = rows.len(), "Parallel simulation completed");
        Ok(ResultTable::from(rows))
    }
}

fn run_trial<S, D, E>(
    labels: &TrialLabels,
    trial: Trial,
    seed: u64,
    sampler: &S,
    truth: &D,
    estimator: &E,
) -> Result<TrialResult>
where
    S: Sampler + ?Sized,
    D: DensityFunction + ?Sized,
    E: DensityEstimator + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial.index));
    let sample = sampler.sample(trial.size, &mut rng)?;

    let start = Instant::now();
    let estimate = estimator.estimate(&sample)?;
    let elapsed = start.elapsed().as_secs_f64();

    let reference = truth.density(&estimate.grid)?;
    let ise = integrated_squared_error(&estimate.grid, &estimate.density, &reference)?;

    trace!(
        size = trial.size,
        iteration = trial.iteration,
        elapsed,
        ise,
        "Trial completed"
    );
    Ok(TrialResult::new(labels, trial.iteration, trial.size, elapsed, ise))
}

/// Run the benchmark loop with a fresh random seed
///
/// Equivalent to a [`Simulation`] configured with `sizes` and `niter`.
pub fn simulate<S, D, E>(
    sampler: &S,
    truth: &D,
    estimator: &E,
    labels: TrialLabels,
    sizes: &[usize],
    niter: usize,
) -> Result<ResultTable>
where
    S: Sampler + ?Sized,
    D: DensityFunction + ?Sized,
    E: DensityEstimator + ?Sized,
{
    Simulation::new(labels)
        .with_sizes(sizes)
        .with_iterations(niter)
        .run(sampler, truth, estimator)
}
