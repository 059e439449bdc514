//! Simulation parameters.
//!
//! Defaults reproduce the reference run: 1000 nodes, 100 trials per
//! strategy, 5% failure probability and utility weights (1.0, 0.5, 0.3, 0.2).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_NUM_NODES: usize = 1000;
pub const DEFAULT_NUM_SIMULATIONS: usize = 100;
pub const DEFAULT_FAILURE_PROB: f64 = 0.05;

/// Weights of the fractal utility `alpha*t - beta*d - gamma*r - delta*s`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityWeights {
    pub alpha: f64, // throughput
    pub beta: f64,  // delay
    pub gamma: f64, // risk
    pub delta: f64, // stress
}

impl Default for UtilityWeights {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 0.5,
            gamma: 0.3,
            delta: 0.2,
        }
    }
}

impl UtilityWeights {
    fn is_finite(&self) -> bool {
        [self.alpha, self.beta, self.gamma, self.delta]
            .iter()
            .all(|w| w.is_finite())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub num_nodes: usize,
    pub num_simulations: usize,
    pub failure_prob: f64,
    pub weights: UtilityWeights,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            failure_prob: DEFAULT_FAILURE_PROB,
            weights: UtilityWeights::default(),
            seed: None,
        }
    }
}

impl SimulationParams {
    /// Load parameters from a TOML file. Missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_nodes == 0 {
            return Err(Error::InvalidConfig("num_nodes must be at least 1".into()));
        }
        if self.num_simulations == 0 {
            return Err(Error::InvalidConfig(
                "num_simulations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.failure_prob) {
            return Err(Error::InvalidConfig(format!(
                "failure_prob must be in [0, 1], got {}",
                self.failure_prob
            )));
        }
        if !self.weights.is_finite() {
            return Err(Error::InvalidConfig(
                "utility weights must be finite".into(),
            ));
        }
        Ok(())
    }
}
