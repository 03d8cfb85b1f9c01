use approx::assert_relative_eq;
use kde_bench::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_prelude_covers_a_full_run() {
    let spec = DistributionSpec::beta(2.0, 5.0);
    let (sampler, truth) = spec.bind().unwrap();

    let mut rng = StdRng::seed_from_u64(8);
    let sample = sampler.sample(500, &mut rng).unwrap();
    assert!(sample.iter().all(|x| (0.0..=1.0).contains(x)));

    let estimator = EstimatorBuilder::new()
        .bound_correction(true)
        .return_bandwidth(true)
        .build()
        .unwrap();
    let estimate = estimator.estimate(&sample).unwrap();
    assert!(estimate.bandwidth.is_some());

    let area = trapezoid(&estimate.grid, &estimate.density).unwrap();
    assert_relative_eq!(area, 1.0, epsilon = 0.02);

    let table = Simulation::new(TrialLabels::new(spec.name(), estimator.name(), estimator.bandwidth_name()))
        .with_sizes(vec![200])
        .with_iterations(4)
        .with_seed(8)
        .run(&sampler, &truth, &estimator)
        .unwrap();
    assert_eq!(table.len(), 4);
    assert!(table.iter().all(|row| row.integrated_squared_error < 1.0));
}

#[test]
fn test_true_density_integrates_to_one() {
    let (_, truth) = Scenarios::trimodal().unwrap().spec.bind().unwrap();
    let grid = linspace(-15.0, 15.0, 3001);
    let values = truth.density(&grid).unwrap();
    assert_relative_eq!(trapezoid(&grid, &values).unwrap(), 1.0, epsilon = 1e-6);
}
