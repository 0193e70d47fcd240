//! Accuracy model
//!
//! Defines the AgentModel parameter record, the built-in scenario table, and
//! the pure functions deriving effective per-step accuracy.

mod accuracy;
mod agent_model;
mod scenario;

pub use accuracy::{
    channels, derive_accuracy, effective_accuracy, effective_pre_correction, overhead_factor,
    DerivedAccuracy,
};
pub use agent_model::{AgentModel, AgentModelBuilder};
pub use scenario::Scenario;
