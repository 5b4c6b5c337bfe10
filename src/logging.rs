//! Tracing setup for the binary.
//!
//! The subscriber is installed before the config file is read, so messages
//! from loading it are not lost. Once the config is known, [`LogHandle::apply`]
//! swaps in the configured level.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

use crate::config::LoggingConfig;

/// Filter with `saavn_catalog=<level>` as the default directive. RUST_LOG wins.
pub fn filter_for(level: &str) -> Result<EnvFilter, ParseError> {
    Ok(EnvFilter::builder()
        .with_default_directive(format!("saavn_catalog={level}").parse()?)
        .from_env_lossy())
}

/// Handle for replacing the filter after startup
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    /// Switch to the level from the `[logging]` config section
    pub fn apply(&self, config: &LoggingConfig) -> anyhow::Result<()> {
        self.0.reload(filter_for(&config.level)?)?;
        Ok(())
    }
}

/// Install the global subscriber at the default level.
///
/// Logs go to stderr so --json output stays machine-readable.
pub fn init() -> anyhow::Result<LogHandle> {
    let (filter, handle) = reload::Layer::new(filter_for(&LoggingConfig::default().level)?);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
    Ok(LogHandle(handle))
}
