//! Simulation settings
//!
//! Every constant the comparison run depends on: the seed, trial count, step
//! counts, interval z-score and the scenario table. Built in code, never read
//! from a file.

use crate::model::{AgentModel, Scenario};

/// Settings for one comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Seed used to reseed the generator before every estimate
    pub seed: u64,

    /// Simulated runs per estimate
    pub trials: u32,

    /// Step counts shown in the comparison table
    pub step_counts: Vec<u32>,

    /// Step counts for which confidence intervals are reported
    pub interval_step_counts: Vec<u32>,

    /// Two-sided z-score for the confidence intervals
    pub z_score: f64,

    /// Denominators at or below this show the advantage as unbounded
    pub advantage_floor: f64,

    /// Architectures to compare; the advantage column divides the first by the second
    pub scenarios: Vec<AgentModel>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            trials: 10_000,
            step_counts: vec![5, 10, 20, 50],
            interval_step_counts: vec![10, 20],
            z_score: crate::estimator::Z_95,
            advantage_floor: 0.0001,
            scenarios: Scenario::table(),
        }
    }
}

impl SimulationConfig {
    /// Replace the scenario table
    pub fn with_scenarios(mut self, scenarios: Vec<AgentModel>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Override the trial count
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Header of the advantage column, naming the first scenario over the second
    ///
    /// Built-in scenarios appear by their short tag, anything else by its full name.
    pub fn advantage_label(&self) -> String {
        let tag = |index: usize| {
            self.scenarios
                .get(index)
                .map(|model| match Scenario::from_name(&model.name) {
                    Some(scenario) => scenario.abbreviation().to_string(),
                    None => model.name.clone(),
                })
                .unwrap_or_else(|| "?".to_string())
        };
        format!("Advantage ({}/{})", tag(0), tag(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.step_counts, vec![5, 10, 20, 50]);
        assert_eq!(config.interval_step_counts, vec![10, 20]);
        assert_eq!(config.z_score, 1.96);
        assert_eq!(config.advantage_floor, 0.0001);
        assert_eq!(config.scenarios, Scenario::table());
    }

    #[test]
    fn test_default_advantage_label() {
        assert_eq!(
            SimulationConfig::default().advantage_label(),
            "Advantage (DS/FI)"
        );
    }

    #[test]
    fn test_advantage_label_follows_scenario_order() {
        let config = SimulationConfig::default().with_scenarios(vec![
            Scenario::FixedCoordinated.model(),
            Scenario::DynamicSwarm.model(),
        ]);
        assert_eq!(config.advantage_label(), "Advantage (FC/DS)");
    }

    #[test]
    fn test_advantage_label_uses_custom_names() {
        let solo = AgentModel::builder("Solo")
            .base_accuracy(0.9)
            .detection_rate(0.5)
            .fix_rate(0.5)
            .build()
            .unwrap();
        let config = SimulationConfig::default()
            .with_scenarios(vec![solo, Scenario::FixedIndependent.model()]);
        assert_eq!(config.advantage_label(), "Advantage (Solo/FI)");
    }
}
