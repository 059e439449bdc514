//! Monte Carlo Driver
//!
//! Repeats single trials of each control strategy and averages the resulting
//! metric tuples element-wise.
//!
//! Strategies are simulated independently from the same generator: all
//! centralized trials first, then all fractal trials. No draw is shared
//! between the two, so comparisons are unpaired.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::centralized;
use crate::config::SimulationParams;
use crate::error::Result;
use crate::fractal;
use crate::sampling::NodeSampler;
use crate::stats::TrialResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlStrategy {
    Centralized, // Global shock on any failure
    Fractal,     // Local neighbor adaptation
}

impl ControlStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Centralized => "Centralized",
            Self::Fractal => "Fractal",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonteCarloResult {
    pub strategy: ControlStrategy,
    pub trials: Vec<TrialResult>,
    pub mean: TrialResult,
}

/// Element-wise arithmetic mean of trial tuples. Empty input yields zeros.
pub fn aggregate(trials: &[TrialResult]) -> TrialResult {
    if trials.is_empty() {
        return TrialResult::default();
    }
    let n = trials.len() as f64;

    TrialResult {
        jitter: trials.iter().map(|t| t.jitter).sum::<f64>() / n,
        recovery: trials.iter().map(|t| t.recovery).sum::<f64>() / n,
        stability: trials.iter().map(|t| t.stability).sum::<f64>() / n,
        resilience: trials.iter().map(|t| t.resilience).sum::<f64>() / n,
    }
}

pub fn run_trial<R: Rng + ?Sized>(
    strategy: ControlStrategy,
    sampler: &NodeSampler,
    params: &SimulationParams,
    rng: &mut R,
) -> TrialResult {
    match strategy {
        ControlStrategy::Centralized => centralized::run_trial(sampler, rng),
        ControlStrategy::Fractal => fractal::run_trial(sampler, &params.weights, rng),
    }
}

pub fn run_monte_carlo<R: Rng + ?Sized>(
    strategy: ControlStrategy,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<MonteCarloResult> {
    params.validate()?;
    let sampler = NodeSampler::from_params(params)?;

    let trials: Vec<TrialResult> = (0..params.num_simulations)
        .map(|_| run_trial(strategy, &sampler, params, rng))
        .collect();
    let mean = aggregate(&trials);

    debug!(
        strategy = strategy.name(),
        runs = trials.len(),
        jitter = mean.jitter,
        resilience = mean.resilience,
        "monte carlo batch complete"
    );

    Ok(MonteCarloResult {
        strategy,
        trials,
        mean,
    })
}

/// Generator for a run: seeded when `params.seed` is set, entropy otherwise.
pub fn rng_for(params: &SimulationParams) -> ChaCha8Rng {
    match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn compare_strategies(
    params: &SimulationParams,
) -> Result<(MonteCarloResult, MonteCarloResult)> {
    let mut rng = rng_for(params);
    let centralized = run_monte_carlo(ControlStrategy::Centralized, params, &mut rng)?;
    let fractal = run_monte_carlo(ControlStrategy::Fractal, params, &mut rng)?;

    info!(
        nodes = params.num_nodes,
        runs = params.num_simulations,
        seed = ?params.seed,
        "strategy comparison complete"
    );

    Ok((centralized, fractal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;

    fn small_params(seed: u64) -> SimulationParams {
        SimulationParams {
            num_nodes: 200,
            num_simulations: 20,
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn trial(values: [f64; 4]) -> TrialResult {
        TrialResult {
            jitter: values[0],
            recovery: values[1],
            stability: values[2],
            resilience: values[3],
        }
    }

    #[test]
    fn test_aggregate_mean() {
        let mean = aggregate(&[trial([1.0, 2.0, 3.0, 40.0]), trial([3.0, 4.0, 5.0, 60.0])]);
        assert_eq!(mean, trial([2.0, 3.0, 4.0, 50.0]));
        assert_eq!(aggregate(&[]), TrialResult::default());
    }

    #[test]
    fn test_monte_carlo_runs() {
        let params = small_params(5);
        let mut rng = rng_for(&params);
        let result = run_monte_carlo(ControlStrategy::Fractal, &params, &mut rng).unwrap();

        assert_eq!(result.strategy, ControlStrategy::Fractal);
        assert_eq!(result.trials.len(), 20);
        assert!(result.mean.is_finite());
        assert_eq!(result.mean, aggregate(&result.trials));
    }

    #[test]
    fn test_invalid_params_fail_fast() {
        let params = SimulationParams {
            num_nodes: 0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = run_monte_carlo(ControlStrategy::Centralized, &params, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_seeded_comparison_is_reproducible() {
        let params = small_params(42);
        let (c1, f1) = compare_strategies(&params).unwrap();
        let (c2, f2) = compare_strategies(&params).unwrap();

        for (a, b) in c1.trials.iter().zip(&c2.trials).chain(f1.trials.iter().zip(&f2.trials)) {
            assert_eq!(a.as_array().map(f64::to_bits), b.as_array().map(f64::to_bits));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let (a, _) = compare_strategies(&small_params(1)).unwrap();
        let (b, _) = compare_strategies(&small_params(2)).unwrap();
        assert_ne!(a.mean, b.mean);
    }

    #[test]
    fn test_centralized_worse_under_failures() {
        let params = SimulationParams {
            seed: Some(7),
            num_simulations: 30,
            ..Default::default()
        };
        let (centralized, fractal) = compare_strategies(&params).unwrap();

        // a 5% failure rate shifts every centralized node by ~0.5
        assert!(centralized.mean.recovery > fractal.mean.recovery);
        assert!(centralized.mean.resilience < fractal.mean.resilience);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(ControlStrategy::Centralized.name(), "Centralized");
        assert_eq!(ControlStrategy::Fractal.name(), "Fractal");
    }

    proptest! {
        #[test]
        fn test_aggregate_order_independent(
            rows in prop::collection::vec(prop::array::uniform4(0.0f64..100.0), 1..64),
            seed in any::<u64>(),
        ) {
            let trials: Vec<TrialResult> = rows.into_iter().map(trial).collect();
            let mut shuffled = trials.clone();
            shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

            let a = aggregate(&trials);
            let b = aggregate(&shuffled);
            for (x, y) in a.as_array().iter().zip(b.as_array()) {
                assert_relative_eq!(*x, y, epsilon = 1e-9);
            }
        }
    }
}
