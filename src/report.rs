//! Comparison report: per-strategy averages and the fractal strategy's
//! relative improvement over the centralized baseline.

use std::fmt;

use crate::monte_carlo::{ControlStrategy, MonteCarloResult};
use crate::stats::TrialResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// Percentage improvement of `candidate` over `baseline`.
///
/// Returns `None` when the baseline is exactly zero.
pub fn improvement(baseline: f64, candidate: f64, direction: Direction) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    let delta = match direction {
        Direction::LowerIsBetter => baseline - candidate,
        Direction::HigherIsBetter => candidate - baseline,
    };
    Some(delta / baseline * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Improvements {
    pub jitter: Option<f64>,
    pub recovery: Option<f64>,
    pub stability: Option<f64>,
    pub resilience: Option<f64>,
}

impl Improvements {
    pub fn between(baseline: &TrialResult, candidate: &TrialResult) -> Self {
        Self {
            jitter: improvement(baseline.jitter, candidate.jitter, Direction::LowerIsBetter),
            recovery: improvement(baseline.recovery, candidate.recovery, Direction::LowerIsBetter),
            stability: improvement(
                baseline.stability,
                candidate.stability,
                Direction::LowerIsBetter,
            ),
            resilience: improvement(
                baseline.resilience,
                candidate.resilience,
                Direction::HigherIsBetter,
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub centralized: TrialResult,
    pub fractal: TrialResult,
    pub improvements: Improvements,
}

impl ComparisonReport {
    pub fn new(centralized: &MonteCarloResult, fractal: &MonteCarloResult) -> Self {
        Self::from_means(centralized.mean, fractal.mean)
    }

    pub fn from_means(centralized: TrialResult, fractal: TrialResult) -> Self {
        Self {
            centralized,
            fractal,
            improvements: Improvements::between(&centralized, &fractal),
        }
    }

    pub fn print(&self) {
        print!("{self}");
    }
}

struct Percent(Option<f64>);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2}%"),
            None => write!(f, "N/A"),
        }
    }
}

fn write_averages(f: &mut fmt::Formatter<'_>, label: &str, m: &TrialResult) -> fmt::Result {
    writeln!(f, "{label} Averages:")?;
    writeln!(
        f,
        "Jitter: {:.4}, Recovery: {:.4}, Stability Var: {:.4}, Resilience: {:.2}%",
        m.jitter, m.recovery, m.stability, m.resilience
    )
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_averages(f, ControlStrategy::Centralized.name(), &self.centralized)?;
        writeln!(f)?;
        write_averages(f, ControlStrategy::Fractal.name(), &self.fractal)?;
        writeln!(f)?;

        let i = &self.improvements;
        writeln!(f, "Improvements:")?;
        writeln!(f, "Jitter Reduction: {}", Percent(i.jitter))?;
        writeln!(f, "Recovery Reduction: {}", Percent(i.recovery))?;
        writeln!(f, "Stability Improvement: {}", Percent(i.stability))?;
        writeln!(f, "Resilience Improvement: {}", Percent(i.resilience))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result(jitter: f64, recovery: f64, stability: f64, resilience: f64) -> TrialResult {
        TrialResult {
            jitter,
            recovery,
            stability,
            resilience,
        }
    }

    #[test]
    fn test_improvement_direction() {
        assert_relative_eq!(
            improvement(2.0, 1.5, Direction::LowerIsBetter).unwrap(),
            25.0
        );
        assert_relative_eq!(
            improvement(80.0, 100.0, Direction::HigherIsBetter).unwrap(),
            25.0
        );
        assert!(improvement(1.0, 2.0, Direction::LowerIsBetter).unwrap() < 0.0);
    }

    #[test]
    fn test_zero_baseline_is_none() {
        assert_eq!(improvement(0.0, 1.0, Direction::LowerIsBetter), None);
        assert_eq!(improvement(0.0, 0.0, Direction::HigherIsBetter), None);
    }

    #[test]
    fn test_report_layout() {
        let report = ComparisonReport::from_means(
            result(0.2, 6.0, 0.04, 99.5),
            result(0.25, 0.1, 0.0625, 99.996),
        );

        let expected = "\
Centralized Averages:
Jitter: 0.2000, Recovery: 6.0000, Stability Var: 0.0400, Resilience: 99.50%

Fractal Averages:
Jitter: 0.2500, Recovery: 0.1000, Stability Var: 0.0625, Resilience: 100.00%

Improvements:
Jitter Reduction: -25.00%
Recovery Reduction: 98.33%
Stability Improvement: -56.25%
Resilience Improvement: 0.50%
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_zero_baseline_prints_na() {
        let report = ComparisonReport::from_means(
            result(0.0, 1.0, 0.0, 0.0),
            result(0.1, 0.5, 0.01, 50.0),
        );
        let text = report.to_string();

        assert!(text.contains("Jitter Reduction: N/A"));
        assert!(text.contains("Recovery Reduction: 50.00%"));
        assert!(text.contains("Stability Improvement: N/A"));
        assert!(text.contains("Resilience Improvement: N/A"));
    }
}
