//! Population statistics over node vectors and the per-trial metric tuple.

/// Summary metrics of one trial.
///
/// Jitter and stability are the population standard deviation and variance of
/// the model's primary signal; resilience is the share of nodes with a
/// positive primary signal, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrialResult {
    pub jitter: f64,
    pub recovery: f64,
    pub stability: f64,
    pub resilience: f64,
}

impl TrialResult {
    /// Builds the tuple from a primary signal and a precomputed recovery value.
    pub fn from_signal(signal: &[f64], recovery: f64) -> Self {
        let stability = variance(signal);
        Self {
            jitter: stability.sqrt(),
            recovery,
            stability,
            resilience: positive_percentage(signal),
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.jitter, self.recovery, self.stability, self.resilience]
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`).
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

pub fn positive_percentage(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().filter(|&&v| v > 0.0).count() as f64 / values.len() as f64 * 100.0
}
