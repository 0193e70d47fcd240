//! Closed-form success rate
//!
//! Each step is an independent Bernoulli trial with success probability equal
//! to the effective accuracy, and a task needs every step to succeed.

use crate::model::{effective_accuracy, AgentModel};

/// Probability of completing `steps` independent steps: accuracy^steps
///
/// Zero steps is the empty product and always yields 1.0.
pub fn analytical_success_rate(model: &AgentModel, steps: u32) -> f64 {
    effective_accuracy(model).powf(f64::from(steps))
}

/// Ratio of two analytical rates, or `None` when the denominator is not above `floor`
pub fn advantage(numerator: f64, denominator: f64, floor: f64) -> Option<f64> {
    if denominator > floor {
        Some(numerator / denominator)
    } else {
        None
    }
}
