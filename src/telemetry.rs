use crate::config::{Config, LogFormat};
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber described by `config`.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| Error::Config(format!("Invalid log filter '{}': {}", config.log_filter, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {}", e)))?;
    tracing::info!(app = %config.app_name, format = %config.log_format, "tracing initialized");
    Ok(())
}
