//! Normal-approximation confidence intervals

use serde::Serialize;

/// Two-sided z-score for a 95% interval
pub const Z_95: f64 = 1.96;

/// Interval around an observed proportion, clamped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

impl ConfidenceInterval {
    /// rate ± z·standard_error, clamped to [0, 1]
    pub fn around(rate: f64, standard_error: f64, z: f64) -> Self {
        let margin = z * standard_error;
        Self {
            low: (rate - margin).max(0.0),
            high: (rate + margin).min(1.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}
