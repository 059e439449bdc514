//! Monte Carlo Resilience Comparison Binary
//!
//! Runs the centralized and fractal controller models side by side and prints
//! their averaged metrics plus the fractal model's relative improvement.
//!
//! ## Usage
//! ```bash
//! cargo run --bin monte_carlo --release -- --runs 1000 --seed 7
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use resilience_simulation::monte_carlo::compare_strategies;
use resilience_simulation::report::ComparisonReport;
use resilience_simulation::SimulationParams;

#[derive(Debug, Parser)]
#[command(author, version, about = "Centralized vs fractal network control under node failures")]
struct Cli {
    /// TOML file with simulation parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of nodes per trial
    #[arg(long)]
    nodes: Option<usize>,

    /// Trials per strategy
    #[arg(long)]
    runs: Option<usize>,

    /// Per-node failure probability
    #[arg(long)]
    failure_prob: Option<f64>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Utility weight on throughput
    #[arg(long)]
    alpha: Option<f64>,

    /// Utility weight on delay
    #[arg(long)]
    beta: Option<f64>,

    /// Utility weight on risk
    #[arg(long)]
    gamma: Option<f64>,

    /// Utility weight on neighbor stress
    #[arg(long)]
    delta: Option<f64>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn params(&self) -> anyhow::Result<SimulationParams> {
        let mut params = match &self.config {
            Some(path) => SimulationParams::from_toml_file(path)?,
            None => SimulationParams::default(),
        };

        if let Some(v) = self.nodes {
            params.num_nodes = v;
        }
        if let Some(v) = self.runs {
            params.num_simulations = v;
        }
        if let Some(v) = self.failure_prob {
            params.failure_prob = v;
        }
        if let Some(v) = self.seed {
            params.seed = Some(v);
        }
        if let Some(v) = self.alpha {
            params.weights.alpha = v;
        }
        if let Some(v) = self.beta {
            params.weights.beta = v;
        }
        if let Some(v) = self.gamma {
            params.weights.gamma = v;
        }
        if let Some(v) = self.delta {
            params.weights.delta = v;
        }

        params.validate()?;
        Ok(params)
    }
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let params = cli.params()?;

    println!("=======================================================");
    println!("  Network Resilience Monte Carlo");
    println!("  Centralized vs Fractal Control");
    println!("=======================================================");
    println!();
    println!("Parameters:");
    println!("  Nodes: {}, Runs per strategy: {}", params.num_nodes, params.num_simulations);
    println!("  Failure probability: {}", params.failure_prob);
    println!(
        "  Weights: alpha={}, beta={}, gamma={}, delta={}",
        params.weights.alpha, params.weights.beta, params.weights.gamma, params.weights.delta
    );
    match params.seed {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: random"),
    }
    println!();

    let (centralized, fractal) = compare_strategies(&params)?;
    ComparisonReport::new(&centralized, &fractal).print();

    Ok(())
}
