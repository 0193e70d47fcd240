//! Logging configuration using tracing
//!
//! Provides structured logging to stderr with support for the RUST_LOG
//! environment variable. Stdout is left to the report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Sets up structured logging with:
/// - Filtering via RUST_LOG environment variable (defaults to "warn" for quiet output)
/// - Formatted output to stderr
///
/// # Example RUST_LOG values
/// - `RUST_LOG=info` - Show the derived accuracy of each scenario
/// - `RUST_LOG=swarm_reliability=debug` - Also show every Monte Carlo estimate
///
/// # Errors
/// Returns an error if the subscriber has already been initialized
pub fn init() -> crate::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| crate::SimError::Other(format!("Failed to initialize tracing: {}", e)))?;

    Ok(())
}

/// Initialize logging for tests (no-op if already initialized)
pub fn init_test() {
    let _ = init();
}
