//! Success estimator
//!
//! Analytical and simulated probability of completing a multi-step task,
//! plus confidence intervals for the simulated proportion.

mod analytical;
mod interval;
mod monte_carlo;

pub use analytical::{advantage, analytical_success_rate};
pub use interval::{ConfidenceInterval, Z_95};
pub use monte_carlo::{simulate, MonteCarloEstimate, MonteCarloEstimator};
