//! Configuration system
//!
//! Holds the fixed settings of a comparison run:
//! - Random seed and Monte Carlo trial count
//! - Step counts for the table and the confidence intervals
//! - The scenario table
//!
//! Settings are constructed in code; there is no configuration file.

mod simulation_config;
pub mod validation;

pub use simulation_config::SimulationConfig;
pub use validation::{validate_config, validate_config_result, ValidationError};
