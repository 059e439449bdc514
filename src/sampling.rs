//! Per-node random inputs for a single trial.
//!
//! ## Distributions
//! - Throughput: Normal(1.0, 0.2)
//! - Delay: Exponential with mean 0.1 (rate 10)
//! - Risk: Uniform[0, 0.1)
//! - Failure: Bernoulli(failure_prob)
//!
//! Every draw is independent across nodes and across trials.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Exp, Normal, Uniform};

use crate::config::SimulationParams;
use crate::error::{Error, Result};

const THROUGHPUT_MEAN: f64 = 1.0;
const THROUGHPUT_STD: f64 = 0.2;
const DELAY_RATE: f64 = 10.0;
const RISK_MAX: f64 = 0.1;

/// Raw node vectors for one trial. All vectors have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSamples {
    pub throughput: Vec<f64>,
    pub delay: Vec<f64>,
    pub risk: Vec<f64>, // empty for the centralized model
    pub failed: Vec<bool>,
}

impl NodeSamples {
    pub fn failure_count(&self) -> usize {
        self.failed.iter().filter(|&&f| f).count()
    }
}

/// Holds the four node distributions for a fixed node count.
///
/// Construction validates the node count and failure probability, so every
/// sampler in circulation produces non-empty vectors.
#[derive(Debug, Clone)]
pub struct NodeSampler {
    num_nodes: usize,
    throughput: Normal<f64>,
    delay: Exp<f64>,
    risk: Uniform<f64>,
    failure: Bernoulli,
}

impl NodeSampler {
    pub fn new(num_nodes: usize, failure_prob: f64) -> Result<Self> {
        if num_nodes == 0 {
            return Err(Error::InvalidConfig("num_nodes must be at least 1".into()));
        }

        let throughput = Normal::new(THROUGHPUT_MEAN, THROUGHPUT_STD)
            .map_err(|e| Error::Distribution(format!("throughput: {e}")))?;
        let delay =
            Exp::new(DELAY_RATE).map_err(|e| Error::Distribution(format!("delay: {e}")))?;
        let failure = Bernoulli::new(failure_prob)
            .map_err(|e| Error::Distribution(format!("failure_prob {failure_prob}: {e}")))?;

        Ok(Self {
            num_nodes,
            throughput,
            delay,
            risk: Uniform::new(0.0, RISK_MAX),
            failure,
        })
    }

    pub fn from_params(params: &SimulationParams) -> Result<Self> {
        Self::new(params.num_nodes, params.failure_prob)
    }

    pub fn throughput<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.throughput.sample_iter(rng).take(self.num_nodes).collect()
    }

    pub fn delays<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.delay.sample_iter(rng).take(self.num_nodes).collect()
    }

    pub fn risks<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.risk.sample_iter(rng).take(self.num_nodes).collect()
    }

    pub fn failures<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<bool> {
        self.failure.sample_iter(rng).take(self.num_nodes).collect()
    }

    /// Draws throughput, delay and failure, in that order.
    pub fn centralized_inputs<R: Rng + ?Sized>(&self, rng: &mut R) -> NodeSamples {
        let throughput = self.throughput(rng);
        let delay = self.delays(rng);
        let failed = self.failures(rng);
        NodeSamples {
            throughput,
            delay,
            risk: Vec::new(),
            failed,
        }
    }

    /// Draws throughput, delay, risk and failure, in that order.
    pub fn fractal_inputs<R: Rng + ?Sized>(&self, rng: &mut R) -> NodeSamples {
        let throughput = self.throughput(rng);
        let delay = self.delays(rng);
        let risk = self.risks(rng);
        let failed = self.failures(rng);
        NodeSamples {
            throughput,
            delay,
            risk,
            failed,
        }
    }
}
