use log::LevelFilter;
use tracing_subscriber::filter::LevelFilter as TracingLevel;

use crate::error::DeploygenResult;

/// Installs the global fmt subscriber. Output goes to stderr so stdout stays clean.
pub fn setup_tracing(level: LevelFilter) -> DeploygenResult {
    tracing_subscriber::fmt()
        .with_max_level(to_tracing_level(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {e}"))?;
    Ok(())
}

fn to_tracing_level(level: LevelFilter) -> TracingLevel {
    match level {
        LevelFilter::Off => TracingLevel::OFF,
        LevelFilter::Error => TracingLevel::ERROR,
        LevelFilter::Warn => TracingLevel::WARN,
        LevelFilter::Info => TracingLevel::INFO,
        LevelFilter::Debug => TracingLevel::DEBUG,
        LevelFilter::Trace => TracingLevel::TRACE,
    }
}
