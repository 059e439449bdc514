//! Network Resilience Simulation Library
//!
//! Monte Carlo comparison of two network-control strategies under random
//! node failures: a centralized controller that reacts to any failure with a
//! network-wide shock, and a fractal controller where nodes adapt locally to
//! their neighbors.
//!
//! ## Modules
//!
//! - `config`: simulation parameters, validation and TOML loading
//! - `sampling`: per-node random inputs (throughput, delay, risk, failure)
//! - `stats`: population statistics and the per-trial metric tuple
//! - `centralized`: one centralized-controller trial
//! - `fractal`: one fractal-controller trial (neighbor stress, utility, adaptation)
//! - `monte_carlo`: repeated trials and element-wise averaging
//! - `report`: averages and relative improvements
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin monte_carlo --release
//!
//! # Reproducible run with 10k nodes
//! cargo run --bin monte_carlo --release -- --nodes 10000 --seed 42
//! ```

pub mod centralized;
pub mod config;
pub mod error;
pub mod fractal;
pub mod monte_carlo;
pub mod report;
pub mod sampling;
pub mod stats;

pub use config::{SimulationParams, UtilityWeights};
pub use error::{Error, Result};
pub use stats::TrialResult;
