//! swarm-reliability - Dynamic swarm vs fixed agentic reliability
//!
//! Main entry point for the swarm-reliability CLI.

use anyhow::Context;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::process;
use swarm_reliability::config::SimulationConfig;
use swarm_reliability::report::{render_text, ComparisonReport, RenderOptions};
use swarm_reliability::style;

/// Compare multi-step task success of dynamic swarm and fixed agentic architectures
#[derive(Parser, Debug)]
#[command(name = "swarm-reliability")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    // Initialize logging
    if let Err(e) = swarm_reliability::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let color = std::io::stderr().is_terminal();
        eprintln!("{} {:#}", style::paint(color, "Error:", style::error), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SimulationConfig::default();

    tracing::info!(
        seed = config.seed,
        trials = config.trials,
        scenarios = config.scenarios.len(),
        "Starting comparison"
    );

    let report =
        ComparisonReport::build(&config).context("Failed to compute the comparison report")?;

    let output = if cli.json {
        report.to_json().context("Failed to serialize the report")?
    } else {
        let color = !cli.no_color && std::io::stdout().is_terminal();
        render_text(&report, RenderOptions { color })
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write the report")?;

    Ok(())
}
