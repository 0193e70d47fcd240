//! Comparison report
//!
//! Runs every scenario through the accuracy model and both estimators and
//! collects the results as plain data. Rendering lives in [`render`]; the
//! same data serializes to JSON for `--json`.

pub mod render;

use crate::config::{validate_config_result, SimulationConfig};
use crate::estimator::{
    advantage, analytical_success_rate, ConfidenceInterval, MonteCarloEstimate,
    MonteCarloEstimator,
};
use crate::model::{derive_accuracy, AgentModel, DerivedAccuracy};
use crate::Result;
use serde::Serialize;

pub use render::{render_text, RenderOptions};

/// One scenario's parameters and derived quantities
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub model: AgentModel,
    pub derived: DerivedAccuracy,
}

/// Analytical and simulated rate for one model at one step count
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonCell {
    pub model: String,
    pub analytical: f64,
    pub monte_carlo: MonteCarloEstimate,
}

/// One row of the comparison table
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub steps: u32,
    pub cells: Vec<ComparisonCell>,
    /// First model's analytical rate over the second's; `None` when unbounded
    pub advantage: Option<f64>,
}

/// Simulated rate with its clamped confidence interval
#[derive(Debug, Clone, Serialize)]
pub struct IntervalEntry {
    pub model: String,
    pub rate: f64,
    pub interval: ConfidenceInterval,
}

/// Confidence intervals for every model at one step count
#[derive(Debug, Clone, Serialize)]
pub struct IntervalGroup {
    pub steps: u32,
    pub entries: Vec<IntervalEntry>,
}

/// Everything printed by a comparison run
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub seed: u64,
    pub trials: u32,
    pub z_score: f64,
    pub advantage_label: String,
    pub models: Vec<ModelSummary>,
    pub rows: Vec<ComparisonRow>,
    pub intervals: Vec<IntervalGroup>,
}

impl ComparisonReport {
    /// Validate `config` and compute the full report
    ///
    /// Fails on the first scenario whose derived quantities leave [0, 1].
    pub fn build(config: &SimulationConfig) -> Result<Self> {
        validate_config_result(config)?;
        let estimator = MonteCarloEstimator::new(config.seed, config.trials)?;

        let models = config
            .scenarios
            .iter()
            .map(|model| {
                Ok(ModelSummary {
                    model: model.clone(),
                    derived: derive_accuracy(model)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rows = config
            .step_counts
            .iter()
            .map(|&steps| comparison_row(config, &estimator, steps))
            .collect();

        let intervals = config
            .interval_step_counts
            .iter()
            .map(|&steps| IntervalGroup {
                steps,
                entries: config
                    .scenarios
                    .iter()
                    .map(|model| {
                        let estimate = estimator.estimate(model, steps);
                        IntervalEntry {
                            model: model.name.clone(),
                            rate: estimate.rate,
                            interval: estimate.confidence_interval(config.z_score),
                        }
                    })
                    .collect(),
            })
            .collect();

        tracing::info!(
            scenarios = models.len(),
            seed = config.seed,
            trials = config.trials,
            "Comparison report built"
        );

        Ok(Self {
            seed: config.seed,
            trials: config.trials,
            z_score: config.z_score,
            advantage_label: config.advantage_label(),
            models,
            rows,
            intervals,
        })
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn comparison_row(
    config: &SimulationConfig,
    estimator: &MonteCarloEstimator,
    steps: u32,
) -> ComparisonRow {
    let cells: Vec<ComparisonCell> = config
        .scenarios
        .iter()
        .map(|model| ComparisonCell {
            model: model.name.clone(),
            analytical: analytical_success_rate(model, steps),
            monte_carlo: estimator.estimate(model, steps),
        })
        .collect();

    let ratio = match (cells.first(), cells.get(1)) {
        (Some(first), Some(second)) => {
            advantage(first.analytical, second.analytical, config.advantage_floor)
        }
        _ => None,
    };

    ComparisonRow {
        steps,
        cells,
        advantage: ratio,
    }
}
