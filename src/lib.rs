//! swarm-reliability - Multi-step task success of agent architectures
//!
//! Estimates how likely an agent architecture is to finish an N-step task when
//! every step is an independent trial. Each architecture's per-step accuracy is
//! composed from its base accuracy, the error cost of inter-agent
//! communication, and in-context self-correction; the closed-form success rate
//! is then cross-checked with a seeded Monte Carlo simulation.
//!
//! # Architecture
//!
//! - **model**: AgentModel parameters, scenario table, effective accuracy
//! - **estimator**: Analytical rate, Monte Carlo estimate, confidence intervals
//! - **config**: Seed, trial count, step counts and validation
//! - **report**: Comparison report data and text rendering

// Core modules
pub mod error;
pub mod estimator;
pub mod model;

// Surrounding modules
pub mod config;
pub mod logging;
pub mod report;
pub mod style;

// Re-exports
pub use error::{Result, SimError};
