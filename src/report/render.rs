//! Text rendering for the comparison report
//!
//! Produces the fixed-width console layout: banner, per-scenario parameters,
//! the comparison table and the confidence intervals.

use super::{ComparisonReport, ComparisonRow, IntervalGroup, ModelSummary};
use crate::estimator::Z_95;
use crate::style::{self, paint};
use std::fmt::Write;

const RULE_WIDTH: usize = 70;
const TABLE_WIDTH: usize = 100;
const TABLE_NAME_CHARS: usize = 20;
const INTERVAL_NAME_CHARS: usize = 30;

/// Rendering switches
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI styling for headings and headline numbers
    pub color: bool,
}

/// Format a probability as a percentage with `decimals` places (0.5 -> "50.00%")
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Group digits in threes (10000 -> "10,000")
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// First `max` characters of `name`
fn truncate(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}

/// Advantage cell: a right-aligned multiplier, or ∞ when unbounded
pub fn format_advantage(advantage: Option<f64>) -> String {
    match advantage {
        Some(ratio) => format!("{:>10.1}x", ratio),
        None => format!("{:>10}", "∞"),
    }
}

/// Render the whole report as text
pub fn render_text(report: &ComparisonReport, options: RenderOptions) -> String {
    let color = options.color;
    let heavy = paint(color, &"=".repeat(RULE_WIDTH), style::dim);
    let light = paint(color, &"-".repeat(RULE_WIDTH), style::dim);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(
        out,
        "{}",
        paint(
            color,
            "Monte Carlo Simulation: Dynamic Swarm vs Fixed Agentic",
            style::header
        )
    );
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "Trials: {}", thousands(u64::from(report.trials)));
    let _ = writeln!(out, "Random seed: {}", report.seed);

    section(&mut out, &light, "MODEL PARAMETERS", color);
    for summary in &report.models {
        render_model(&mut out, summary, color);
    }

    section(&mut out, &light, "SIMULATION RESULTS", color);
    render_table(&mut out, report, color);

    let level = if (report.z_score - Z_95).abs() < f64::EPSILON {
        "95%".to_string()
    } else {
        format!("z = {}", report.z_score)
    };
    section(
        &mut out,
        &light,
        &format!("{} CONFIDENCE INTERVALS (Monte Carlo)", level),
        color,
    );
    for group in &report.intervals {
        render_intervals(&mut out, group);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "Reproduce with: swarm-reliability");
    let _ = writeln!(out, "Add --json for machine-readable output");
    let _ = writeln!(out, "{}", heavy);

    out
}

fn section(out: &mut String, rule: &str, title: &str, color: bool) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{}", paint(color, title, style::header));
    let _ = writeln!(out, "{}", rule);
}

/// Parameter block for one scenario
pub fn render_model(out: &mut String, summary: &ModelSummary, color: bool) {
    let model = &summary.model;
    let derived = &summary.derived;

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", paint(color, &model.name, style::subheader));
    let _ = writeln!(out, "  Base accuracy:     {}", percent(model.base_accuracy, 2));
    let _ = writeln!(out, "  Agent count:       {}", model.agent_count);
    let _ = writeln!(out, "  Channels:          {}", derived.channels);
    let _ = writeln!(out, "  Channel error:     {}", percent(model.channel_error_rate, 2));
    let _ = writeln!(out, "  Overhead factor:   {}", percent(derived.overhead_factor, 2));
    let _ = writeln!(
        out,
        "  Pre-correction:    {}",
        percent(derived.effective_pre_correction, 2)
    );
    let _ = writeln!(out, "  Detection rate:    {}", percent(model.detection_rate, 2));
    let _ = writeln!(out, "  Fix rate:          {}", percent(model.fix_rate, 2));
    let _ = writeln!(
        out,
        "  Effective acc:     {}",
        paint(color, &percent(derived.effective_accuracy, 4), style::success)
    );
}

fn render_table(out: &mut String, report: &ComparisonReport, color: bool) {
    let mut header = format!("\n{:>6} | ", "Steps");
    for summary in &report.models {
        let _ = write!(
            header,
            "{:>22} | ",
            truncate(&summary.model.name, TABLE_NAME_CHARS)
        );
    }
    header.push_str(&report.advantage_label);

    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for row in &report.rows {
        let _ = writeln!(out, "{}", render_row(row, color));
    }
}

/// One table row, without trailing newline
pub fn render_row(row: &ComparisonRow, color: bool) -> String {
    let mut line = format!("{:>6} | ", row.steps);
    for cell in &row.cells {
        let _ = write!(
            line,
            "{:>8} (MC:{:>6}) | ",
            percent(cell.analytical, 2),
            percent(cell.monte_carlo.rate, 2)
        );
    }
    line.push_str(&paint(color, &format_advantage(row.advantage), style::highlight));
    line
}

fn render_intervals(out: &mut String, group: &IntervalGroup) {
    let _ = writeln!(out);
    let _ = writeln!(out, "At {} steps:", group.steps);
    for entry in &group.entries {
        let _ = writeln!(
            out,
            "  {:<30} {:>8} [{:>6}, {:>6}]",
            truncate(&entry.model, INTERVAL_NAME_CHARS),
            percent(entry.rate, 2),
            percent(entry.interval.low, 2),
            percent(entry.interval.high, 2)
        );
    }
}
