//! Centralized Controller Model
//!
//! A single controller sees every node. Any failure anywhere triggers one
//! global shock proportional to the failed fraction of the network, applied
//! uniformly to all nodes regardless of which ones failed.
//!
//! ## Per-trial metrics
//! - Jitter / stability: std dev / variance of shocked throughput
//! - Recovery: mean shocked delay, scaled by 10
//! - Resilience: % of nodes with positive throughput

use rand::Rng;
use tracing::trace;

use crate::sampling::{NodeSampler, NodeSamples};
use crate::stats::{mean, TrialResult};

const IMPACT_SCALE: f64 = 10.0;
const RECOVERY_SCALE: f64 = 10.0;

/// Shock magnitude: failed fraction of nodes times 10.
pub fn global_impact(failed: &[bool]) -> f64 {
    if failed.is_empty() {
        return 0.0;
    }
    let failures = failed.iter().filter(|&&f| f).count();
    failures as f64 / failed.len() as f64 * IMPACT_SCALE
}

/// Applies the global shock in place. Returns the impact, 0 when nothing failed.
pub fn apply_global_shock(samples: &mut NodeSamples) -> f64 {
    if !samples.failed.iter().any(|&f| f) {
        return 0.0;
    }

    let impact = global_impact(&samples.failed);
    for t in samples.throughput.iter_mut() {
        *t -= impact;
    }
    for d in samples.delay.iter_mut() {
        *d += impact;
    }
    impact
}

/// Metrics for an already-drawn set of node samples.
pub fn evaluate(mut samples: NodeSamples) -> TrialResult {
    let impact = apply_global_shock(&mut samples);
    trace!(impact, failures = samples.failure_count(), "centralized trial");

    TrialResult::from_signal(&samples.throughput, mean(&samples.delay) * RECOVERY_SCALE)
}

pub fn run_trial<R: Rng + ?Sized>(sampler: &NodeSampler, rng: &mut R) -> TrialResult {
    evaluate(sampler.centralized_inputs(rng))
}
