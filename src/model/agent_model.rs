//! Agent architecture parameters
//!
//! An immutable record of the five numbers that describe how reliable one
//! agent architecture is per step. Uses Builder pattern for construction so
//! the single-orchestrator defaults (one agent, no channel error) can be left out.

use crate::{Result, SimError};
use serde::Serialize;

/// Parameters for an agent architecture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentModel {
    /// Display label (e.g., "Dynamic Swarm + HOTL")
    pub name: String,

    /// Per-step correctness before communication or correction effects
    pub base_accuracy: f64,

    /// Probability that an error is noticed in-context
    pub detection_rate: f64,

    /// Probability that a detected error is corrected
    pub fix_rate: f64,

    /// Number of cooperating agents (at least 1)
    pub agent_count: u32,

    /// Probability that a single pairwise channel introduces an error
    pub channel_error_rate: f64,
}

impl AgentModel {
    /// Create a new AgentModel builder
    pub fn builder(name: impl Into<String>) -> AgentModelBuilder {
        AgentModelBuilder {
            name: name.into(),
            ..AgentModelBuilder::default()
        }
    }

    /// Check every raw parameter against its documented range
    pub fn validate(&self) -> Result<()> {
        self.check_probability("base_accuracy", self.base_accuracy)?;
        self.check_probability("detection_rate", self.detection_rate)?;
        self.check_probability("fix_rate", self.fix_rate)?;
        self.check_probability("channel_error_rate", self.channel_error_rate)?;

        if self.agent_count == 0 {
            return Err(SimError::InvalidParameter {
                model: self.name.clone(),
                field: "agent_count",
                value: 0.0,
                reason: "at least one agent is required",
            });
        }

        Ok(())
    }

    fn check_probability(&self, field: &'static str, value: f64) -> Result<()> {
        if value.is_nan() {
            return Err(SimError::InvalidParameter {
                model: self.name.clone(),
                field,
                value,
                reason: "must be a number",
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(SimError::InvalidParameter {
                model: self.name.clone(),
                field,
                value,
                reason: "must be within [0, 1]",
            });
        }
        Ok(())
    }
}

/// Builder for AgentModel
#[derive(Debug, Default)]
pub struct AgentModelBuilder {
    name: String,
    base_accuracy: Option<f64>,
    detection_rate: Option<f64>,
    fix_rate: Option<f64>,
    agent_count: Option<u32>,
    channel_error_rate: Option<f64>,
}

impl AgentModelBuilder {
    /// Set the base per-step accuracy
    pub fn base_accuracy(mut self, accuracy: f64) -> Self {
        self.base_accuracy = Some(accuracy);
        self
    }

    /// Set the in-context error detection rate
    pub fn detection_rate(mut self, rate: f64) -> Self {
        self.detection_rate = Some(rate);
        self
    }

    /// Set the self-correction success rate
    pub fn fix_rate(mut self, rate: f64) -> Self {
        self.fix_rate = Some(rate);
        self
    }

    /// Set the number of agents (defaults to 1)
    pub fn agent_count(mut self, count: u32) -> Self {
        self.agent_count = Some(count);
        self
    }

    /// Set the per-channel error rate (defaults to 0.0)
    pub fn channel_error_rate(mut self, rate: f64) -> Self {
        self.channel_error_rate = Some(rate);
        self
    }

    /// Build the AgentModel, returning an error if a field is missing or out of range
    pub fn build(self) -> Result<AgentModel> {
        let missing = |field: &'static str| SimError::InvalidParameter {
            model: self.name.clone(),
            field,
            value: f64::NAN,
            reason: "required",
        };

        let base_accuracy = self.base_accuracy.ok_or_else(|| missing("base_accuracy"))?;
        let detection_rate = self.detection_rate.ok_or_else(|| missing("detection_rate"))?;
        let fix_rate = self.fix_rate.ok_or_else(|| missing("fix_rate"))?;

        let model = AgentModel {
            name: self.name,
            base_accuracy,
            detection_rate,
            fix_rate,
            agent_count: self.agent_count.unwrap_or(1),
            channel_error_rate: self.channel_error_rate.unwrap_or(0.0),
        };
        model.validate()?;

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let model = AgentModel::builder("Solo")
            .base_accuracy(0.9)
            .detection_rate(0.5)
            .fix_rate(0.5)
            .build()
            .unwrap();

        assert_eq!(model.name, "Solo");
        assert_eq!(model.agent_count, 1);
        assert_eq!(model.channel_error_rate, 0.0);
    }

    #[test]
    fn test_builder_complete() {
        let model = AgentModel::builder("Team")
            .base_accuracy(0.8)
            .detection_rate(0.4)
            .fix_rate(0.6)
            .agent_count(4)
            .channel_error_rate(0.05)
            .build()
            .unwrap();

        assert_eq!(model.agent_count, 4);
        assert_eq!(model.channel_error_rate, 0.05);
    }

    #[test]
    fn test_builder_missing_field() {
        let result = AgentModel::builder("Incomplete")
            .base_accuracy(0.9)
            .fix_rate(0.5)
            .build();

        match result {
            Err(SimError::InvalidParameter { field, .. }) => assert_eq!(field, "detection_rate"),
            other => panic!("expected missing detection_rate, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let result = AgentModel::builder("Overconfident")
            .base_accuracy(1.2)
            .detection_rate(0.5)
            .fix_rate(0.5)
            .build();

        match result {
            Err(SimError::InvalidParameter { field, value, .. }) => {
                assert_eq!(field, "base_accuracy");
                assert_eq!(value, 1.2);
            }
            other => panic!("expected base_accuracy rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_nan() {
        let result = AgentModel::builder("Undefined")
            .base_accuracy(0.9)
            .detection_rate(0.5)
            .fix_rate(0.5)
            .channel_error_rate(f64::NAN)
            .build();

        assert!(matches!(
            result,
            Err(SimError::InvalidParameter {
                field: "channel_error_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_agents() {
        let result = AgentModel::builder("Nobody")
            .base_accuracy(0.9)
            .detection_rate(0.5)
            .fix_rate(0.5)
            .agent_count(0)
            .build();

        assert!(matches!(
            result,
            Err(SimError::InvalidParameter {
                field: "agent_count",
                ..
            })
        ));
    }

    #[test]
    fn test_boundary_probabilities_accepted() {
        let model = AgentModel::builder("Edges")
            .base_accuracy(1.0)
            .detection_rate(0.0)
            .fix_rate(1.0)
            .channel_error_rate(0.0)
            .build();
        assert!(model.is_ok());
    }
}
