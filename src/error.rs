//! Error types for swarm-reliability
//!
//! Defines the error enum covering parameter validation, derived-quantity
//! invariant violations and output failures. Uses thiserror for ergonomic
//! error handling.

use thiserror::Error;

/// Result type alias for swarm-reliability operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Error type for swarm-reliability operations
#[derive(Error, Debug)]
pub enum SimError {
    /// A raw model parameter is outside its documented range
    #[error("Invalid parameter for '{model}': {field} = {value} ({reason})")]
    InvalidParameter {
        model: String,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A derived probability left [0, 1]; this is a defect in the formula, not bad input
    #[error("Invariant violated for '{model}': {quantity} = {value} is outside [0, 1]")]
    InvariantViolation {
        model: String,
        quantity: &'static str,
        value: f64,
    },

    /// Simulation configuration errors
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
