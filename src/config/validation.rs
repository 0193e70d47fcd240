//! Configuration validation
//!
//! Validates a simulation configuration for correctness:
//! - At least two scenarios, with unique names and in-range parameters
//! - A positive trial count
//! - Non-empty step count lists
//! - A usable z-score and advantage floor

use super::simulation_config::SimulationConfig;
use crate::SimError;
use std::collections::HashSet;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub scenario: Option<String>,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scenario: None,
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref scenario) = self.scenario {
            write!(f, "[{}] {}: {}", scenario, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a simulation configuration, collecting every problem
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    // The advantage column needs a numerator and a denominator
    if config.scenarios.len() < 2 {
        errors.push(ValidationError::new(
            "scenarios",
            "At least two scenarios must be defined",
        ));
    }

    let mut seen_names = HashSet::new();
    for (index, model) in config.scenarios.iter().enumerate() {
        if !seen_names.insert(&model.name) {
            errors.push(ValidationError::new(
                "scenarios",
                format!("Duplicate scenario name: {}", model.name),
            ));
        }

        if model.name.trim().is_empty() {
            errors.push(
                ValidationError::new("name", "Scenario name cannot be empty")
                    .with_scenario(format!("scenario {}", index + 1)),
            );
        }

        if let Err(e) = model.validate() {
            let field = match &e {
                SimError::InvalidParameter { field, .. } => field.to_string(),
                _ => "parameters".to_string(),
            };
            errors.push(ValidationError::new(field, e.to_string()).with_scenario(&model.name));
        }
    }

    if config.trials == 0 {
        errors.push(ValidationError::new(
            "trials",
            "Trial count must be greater than 0",
        ));
    }

    if config.step_counts.is_empty() {
        errors.push(ValidationError::new(
            "step_counts",
            "At least one step count is required",
        ));
    }

    if config.interval_step_counts.is_empty() {
        errors.push(ValidationError::new(
            "interval_step_counts",
            "At least one interval step count is required",
        ));
    }

    if !config.z_score.is_finite() || config.z_score <= 0.0 {
        errors.push(ValidationError::new(
            "z_score",
            format!("z-score must be a positive number, got {}", config.z_score),
        ));
    }

    if !(0.0..1.0).contains(&config.advantage_floor) {
        errors.push(ValidationError::new(
            "advantage_floor",
            format!(
                "Advantage floor must be within [0, 1), got {}",
                config.advantage_floor
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate and convert to a crate Result
pub fn validate_config_result(config: &SimulationConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        SimError::InvalidConfig(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}
