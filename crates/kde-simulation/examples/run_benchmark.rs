//! Benchmark the default and boundary-corrected estimators on every standard
//! scenario and write the rows to a CSV file.
//!
//! ```text
//! RUST_LOG=kde_simulation=debug cargo run -p kde-simulation --example run_benchmark -- results.csv
//! ```
//!
//! Pass an experiment JSON file instead of a CSV path to run a single
//! configured experiment.

use anyhow::Context;
use kde_distributions::Scenarios;
use kde_estimator::{BandwidthMethod, EstimatorBuilder};
use kde_simulation::{ExperimentConfig, ResultTable, Simulation, TrialLabels};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let arg = std::env::args().nth(1);

    if let Some(path) = arg.as_deref().filter(|p| p.ends_with(".json")) {
        let config = ExperimentConfig::from_json_path(path)
            .with_context(|| format!("reading experiment from {path}"))?;
        let table = config.run()?;
        for summary in table.summarize() {
            println!("{summary}");
        }
        return Ok(());
    }

    let estimators = [
        EstimatorBuilder::new().build()?,
        EstimatorBuilder::new()
            .bandwidth(BandwidthMethod::Scott)
            .bound_correction(true)
            .build()?,
    ];

    let mut results = ResultTable::new();
    for scenario in Scenarios::all()? {
        let (sampler, truth) = scenario.spec.bind()?;
        for estimator in &estimators {
            info!(scenario = scenario.name, estimator = %estimator.name(), "Benchmarking");
            let labels = TrialLabels::new(scenario.name, estimator.name(), estimator.bandwidth_name());
            let table = Simulation::new(labels)
                .with_sizes(vec![100, 500, 2000])
                .with_iterations(25)
                .with_seed(42)
                .run(&sampler, &truth, estimator)?;
            results.extend(table);
        }
    }

    for summary in results.summarize() {
        println!("{summary}");
    }

    let output = arg.unwrap_or_else(|| "kde_benchmark.csv".to_string());
    results
        .to_csv_path(&output)
        .with_context(|| format!("writing results to {output}"))?;
    info!(rows = results.len(), path = %output, "Results written");
    Ok(())
}
