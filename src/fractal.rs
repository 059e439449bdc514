//! Fractal (Locally-Adaptive) Controller Model
//!
//! Each node reacts to its own neighborhood instead of a global controller.
//! Nodes are arranged on a fixed line; stress measures how far a node's
//! throughput diverges from its immediate left and right neighbors.
//!
//! ## Trial steps
//! 1. Draw throughput, delay, risk and failure vectors
//! 2. Neighbor stress (wrap-around pass, then patch the two end nodes)
//! 3. Utility = alpha*throughput - beta*delay - gamma*risk - delta*stress
//! 4. Local adaptation: a failed node halves its throughput, each existing
//!    neighbor gains 0.2
//! 5. Metrics over utility; recovery is the unscaled mean delay
//!
//! Utility is fixed before adaptation runs, so adaptation never changes the
//! reported metrics. The adapted throughput is still returned by [`evaluate`].

use rand::Rng;
use tracing::trace;

use crate::config::UtilityWeights;
use crate::sampling::{NodeSampler, NodeSamples};
use crate::stats::{mean, TrialResult};

/// Guards every stress denominator against a zero neighbor throughput.
pub const STRESS_EPSILON: f64 = 1e-6;

const FAILURE_RETAINED: f64 = 0.5;
const NEIGHBOR_BOOST: f64 = 0.2;

/// Everything one fractal trial computes.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalTrial {
    pub stress: Vec<f64>,
    pub utility: Vec<f64>,
    pub adapted_throughput: Vec<f64>,
    pub result: TrialResult,
}

fn relative_diff(value: f64, neighbor: f64) -> f64 {
    (value - neighbor).abs() / (neighbor + STRESS_EPSILON)
}

/// Per-node relative divergence from the immediate neighbors.
///
/// Interior nodes average the left and right differences. The first and last
/// nodes are first computed as if the line wrapped around, then overwritten
/// with the single difference to their only real neighbor. A lone node has no
/// neighbor to patch from and keeps its wrap value of zero.
pub fn neighbor_stress(throughput: &[f64]) -> Vec<f64> {
    let n = throughput.len();
    if n == 0 {
        return Vec::new();
    }

    let mut stress: Vec<f64> = (0..n)
        .map(|i| {
            let left = throughput[(i + n - 1) % n];
            let right = throughput[(i + 1) % n];
            (relative_diff(throughput[i], left) + relative_diff(throughput[i], right)) / 2.0
        })
        .collect();

    if n > 1 {
        stress[0] = relative_diff(throughput[0], throughput[1]);
        stress[n - 1] = relative_diff(throughput[n - 1], throughput[n - 2]);
    }

    stress
}

pub fn utility(samples: &NodeSamples, stress: &[f64], weights: &UtilityWeights) -> Vec<f64> {
    samples
        .throughput
        .iter()
        .zip(&samples.delay)
        .zip(&samples.risk)
        .zip(stress)
        .map(|(((t, d), r), s)| {
            weights.alpha * t - weights.beta * d - weights.gamma * r - weights.delta * s
        })
        .collect()
}

/// Applies local adaptation in place, visiting failed nodes in index order.
///
/// Adjacent failures compound: a node boosted by an earlier failed neighbor
/// is halved after the boost.
pub fn adapt_locally(throughput: &mut [f64], failed: &[bool]) {
    let n = throughput.len();
    for i in (0..n).filter(|&i| failed[i]) {
        throughput[i] *= FAILURE_RETAINED;
        if i > 0 {
            throughput[i - 1] += NEIGHBOR_BOOST;
        }
        if i < n - 1 {
            throughput[i + 1] += NEIGHBOR_BOOST;
        }
    }
}

/// Runs steps 2-5 on already-drawn samples.
pub fn evaluate(samples: &NodeSamples, weights: &UtilityWeights) -> FractalTrial {
    let stress = neighbor_stress(&samples.throughput);
    let utility = utility(samples, &stress, weights);

    let mut adapted_throughput = samples.throughput.clone();
    adapt_locally(&mut adapted_throughput, &samples.failed);
    trace!(failures = samples.failure_count(), "fractal trial adapted");

    let result = TrialResult::from_signal(&utility, mean(&samples.delay));

    FractalTrial {
        stress,
        utility,
        adapted_throughput,
        result,
    }
}

pub fn run_trial<R: Rng + ?Sized>(
    sampler: &NodeSampler,
    weights: &UtilityWeights,
    rng: &mut R,
) -> TrialResult {
    let samples = sampler.fractal_inputs(rng);
    evaluate(&samples, weights).result
}
