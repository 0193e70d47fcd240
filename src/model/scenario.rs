//! Built-in architecture scenarios
//!
//! The three parameter sets compared by the report, as an explicit table
//! rather than process-wide constants.

use super::AgentModel;

/// The architectures under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// One orchestrator context with a human on the loop
    DynamicSwarm,
    /// Four fixed agents working independently
    FixedIndependent,
    /// Four fixed agents with explicit coordination
    FixedCoordinated,
}

impl Scenario {
    /// All scenarios in report order
    pub const ALL: [Scenario; 3] = [
        Scenario::DynamicSwarm,
        Scenario::FixedIndependent,
        Scenario::FixedCoordinated,
    ];

    /// Display label
    pub fn name(self) -> &'static str {
        match self {
            Scenario::DynamicSwarm => "Dynamic Swarm + HOTL",
            Scenario::FixedIndependent => "Fixed Agentic (Independent)",
            Scenario::FixedCoordinated => "Fixed Agentic (Coordinated)",
        }
    }

    /// Short tag used in column headers
    pub fn abbreviation(self) -> &'static str {
        match self {
            Scenario::DynamicSwarm => "DS",
            Scenario::FixedIndependent => "FI",
            Scenario::FixedCoordinated => "FC",
        }
    }

    /// Look up a built-in scenario by its display label
    pub fn from_name(name: &str) -> Option<Scenario> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Parameter record for this scenario
    pub fn model(self) -> AgentModel {
        let (base_accuracy, detection_rate, fix_rate, agent_count, channel_error_rate) = match self
        {
            Scenario::DynamicSwarm => (0.97, 0.75, 0.90, 1, 0.0),
            Scenario::FixedIndependent => (0.80, 0.40, 0.60, 4, 0.05),
            Scenario::FixedCoordinated => (0.88, 0.55, 0.75, 4, 0.03),
        };

        AgentModel {
            name: self.name().to_string(),
            base_accuracy,
            detection_rate,
            fix_rate,
            agent_count,
            channel_error_rate,
        }
    }

    /// Parameter records for every scenario, in report order
    pub fn table() -> Vec<AgentModel> {
        Self::ALL.iter().map(|s| s.model()).collect()
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
