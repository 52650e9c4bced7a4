//! Command-line driver: estimates the percolation threshold of an n-by-n
//! grid over repeated randomized trials.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=u_percolation=debug`).

use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_percolation::{ExperimentConfig, PercolationExperiment};

const INTERVAL_LABEL: &str = "95% confidence interval";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Monte Carlo estimate of the site-percolation threshold of an n-by-n grid.",
    allow_negative_numbers = true
)]
struct Cli {
    /// Grid dimension n.
    size: i64,

    /// Number of independent trials.
    trials: i64,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ExperimentConfig {
        size: cli.size,
        trials: cli.trials,
        seed: cli.seed,
    };
    let experiment = config.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&experiment.summary())?);
    } else {
        print_report(&experiment);
    }
    Ok(())
}

fn print_report(experiment: &PercolationExperiment) {
    let width = INTERVAL_LABEL.len();
    println!("{:<width$} = {}", "mean", experiment.mean());
    println!("{:<width$} = {}", "stddev", experiment.stddev());
    println!(
        "{INTERVAL_LABEL} = [{}, {}]",
        experiment.confidence_lo(),
        experiment.confidence_hi()
    );
}
