//! Effective per-step accuracy
//!
//! Pure functions from an [`AgentModel`] to its derived quantities. Nothing is
//! cached; every value is recomputed from the record on each call.

use super::AgentModel;
use crate::{Result, SimError};
use serde::Serialize;

/// Number of unique agent pairs, n*(n-1)/2
///
/// Saturates to 0 for a hand-built record with no agents.
pub fn channels(model: &AgentModel) -> u64 {
    let n = u64::from(model.agent_count);
    n * n.saturating_sub(1) / 2
}

/// Probability that at least one channel fails during a step
///
/// Exactly 0.0 when there are no channels, whatever the channel error rate.
pub fn overhead_factor(model: &AgentModel) -> f64 {
    let channels = channels(model);
    if channels == 0 {
        return 0.0;
    }
    1.0 - (1.0 - model.channel_error_rate).powf(channels as f64)
}

/// Accuracy after communication overhead, before self-correction
pub fn effective_pre_correction(model: &AgentModel) -> f64 {
    model.base_accuracy * (1.0 - overhead_factor(model))
}

/// Final per-step success probability: the step succeeds outright, or fails
/// and is then caught and fixed
pub fn effective_accuracy(model: &AgentModel) -> f64 {
    let pre = effective_pre_correction(model);
    pre + (1.0 - pre) * model.detection_rate * model.fix_rate
}

/// Snapshot of every derived quantity for one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedAccuracy {
    pub channels: u64,
    pub overhead_factor: f64,
    pub effective_pre_correction: f64,
    pub effective_accuracy: f64,
}

/// Derive all quantities for `model`, checking each against [0, 1]
///
/// Raw parameters are validated first. A derived value outside [0, 1] is
/// reported as [`SimError::InvariantViolation`] naming the offending quantity.
pub fn derive_accuracy(model: &AgentModel) -> Result<DerivedAccuracy> {
    model.validate()?;

    let derived = DerivedAccuracy {
        channels: channels(model),
        overhead_factor: overhead_factor(model),
        effective_pre_correction: effective_pre_correction(model),
        effective_accuracy: effective_accuracy(model),
    };

    check_invariants(model, &derived)?;

    tracing::info!(
        model = %model.name,
        channels = derived.channels,
        overhead_factor = derived.overhead_factor,
        effective_accuracy = derived.effective_accuracy,
        "Derived effective accuracy"
    );

    Ok(derived)
}

fn check_invariants(model: &AgentModel, derived: &DerivedAccuracy) -> Result<()> {
    let quantities = [
        ("overhead_factor", derived.overhead_factor),
        ("effective_pre_correction", derived.effective_pre_correction),
        ("effective_accuracy", derived.effective_accuracy),
    ];

    for (quantity, value) in quantities {
        if !(0.0..=1.0).contains(&value) {
            tracing::error!(model = %model.name, quantity, value, "Derived probability out of range");
            return Err(SimError::InvariantViolation {
                model: model.name.clone(),
                quantity,
                value,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scenario;
    use proptest::prelude::*;

    fn team(agent_count: u32, channel_error_rate: f64) -> AgentModel {
        AgentModel {
            name: "team".to_string(),
            base_accuracy: 0.9,
            detection_rate: 0.5,
            fix_rate: 0.5,
            agent_count,
            channel_error_rate,
        }
    }

    #[test]
    fn test_dynamic_swarm_accuracy() {
        let model = Scenario::DynamicSwarm.model();
        assert_eq!(channels(&model), 0);
        assert_eq!(overhead_factor(&model), 0.0);
        assert!((effective_accuracy(&model) - 0.99025).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_independent_accuracy() {
        let model = Scenario::FixedIndependent.model();
        assert_eq!(channels(&model), 6);
        assert!((overhead_factor(&model) - 0.264908).abs() < 1e-6);
        assert!((effective_pre_correction(&model) - 0.588074).abs() < 1e-6);

        let pre = effective_pre_correction(&model);
        let expected = pre + (1.0 - pre) * 0.40 * 0.60;
        assert!((effective_accuracy(&model) - expected).abs() < 1e-12);
        assert!((effective_accuracy(&model) - 0.686936).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_coordinated_accuracy() {
        let model = Scenario::FixedCoordinated.model();
        assert_eq!(channels(&model), 6);
        assert!((overhead_factor(&model) - 0.167028).abs() < 1e-6);
        assert!((effective_accuracy(&model) - 0.843147).abs() < 1e-6);
    }

    #[test]
    fn test_single_agent_has_no_overhead() {
        let model = team(1, 0.9);
        assert_eq!(channels(&model), 0);
        assert_eq!(overhead_factor(&model), 0.0);
        assert_eq!(effective_pre_correction(&model), 0.9);
    }

    #[test]
    fn test_zero_agents_saturates() {
        let model = team(0, 0.5);
        assert_eq!(channels(&model), 0);
        assert_eq!(overhead_factor(&model), 0.0);
        assert!(derive_accuracy(&model).is_err());
    }

    #[test]
    fn test_channel_growth() {
        assert_eq!(channels(&team(2, 0.0)), 1);
        assert_eq!(channels(&team(3, 0.0)), 3);
        assert_eq!(channels(&team(10, 0.0)), 45);
    }

    #[test]
    fn test_derive_matches_functions() {
        let model = Scenario::FixedCoordinated.model();
        let derived = derive_accuracy(&model).unwrap();
        assert_eq!(derived.channels, channels(&model));
        assert_eq!(derived.overhead_factor, overhead_factor(&model));
        assert_eq!(derived.effective_accuracy, effective_accuracy(&model));
    }

    #[test]
    fn test_derive_rejects_bad_parameters() {
        let mut model = team(4, 0.05);
        model.channel_error_rate = 1.5;
        match derive_accuracy(&model) {
            Err(SimError::InvalidParameter { field, .. }) => {
                assert_eq!(field, "channel_error_rate")
            }
            other => panic!("expected parameter rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_invariant_check_names_quantity() {
        let model = team(4, 0.05);
        let derived = DerivedAccuracy {
            channels: 6,
            overhead_factor: 1.25,
            effective_pre_correction: -0.2,
            effective_accuracy: 0.5,
        };
        match check_invariants(&model, &derived) {
            Err(SimError::InvariantViolation { quantity, value, .. }) => {
                assert_eq!(quantity, "overhead_factor");
                assert_eq!(value, 1.25);
            }
            other => panic!("expected invariant violation, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_effective_accuracy_in_unit_range(
            base in 0.0f64..=1.0,
            detection in 0.0f64..=1.0,
            fix in 0.0f64..=1.0,
            agents in 1u32..50,
            channel_error in 0.0f64..=1.0,
        ) {
            let model = AgentModel {
                name: "prop".to_string(),
                base_accuracy: base,
                detection_rate: detection,
                fix_rate: fix,
                agent_count: agents,
                channel_error_rate: channel_error,
            };
            let derived = derive_accuracy(&model);
            prop_assert!(derived.is_ok());
            let accuracy = effective_accuracy(&model);
            prop_assert!((0.0..=1.0).contains(&accuracy));
        }

        #[test]
        fn prop_no_channel_error_means_no_overhead(agents in 1u32..1000) {
            prop_assert_eq!(overhead_factor(&team(agents, 0.0)), 0.0);
        }

        #[test]
        fn prop_single_agent_ignores_channel_error(channel_error in 0.0f64..=1.0) {
            let model = team(1, channel_error);
            prop_assert_eq!(channels(&model), 0);
            prop_assert_eq!(overhead_factor(&model), 0.0);
        }
    }
}
