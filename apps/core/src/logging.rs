//! Tracing subscriber setup for the Hades shell.
//!
//! `RUST_LOG` takes precedence over the configured filter. Logs go to
//! stderr so stdout only carries the conversation.

use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{HadesConfig, LogFormat, LOG_FILTER_VAR};
use crate::error::AppError;

/// Build the env filter from `RUST_LOG`, falling back to the config directive
pub fn env_filter(config: &HadesConfig) -> Result<EnvFilter, AppError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| AppError::Config(format!("{}: {}", LOG_FILTER_VAR, e)))
}

/// Build the subscriber stack for the configured format without installing it
pub fn subscriber(config: &HadesConfig) -> Result<Box<dyn Subscriber + Send + Sync>, AppError> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    Ok(match config.log_format {
        LogFormat::Pretty => Box::new(
            registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)),
        ),
        LogFormat::Json => Box::new(
            registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    config.name.to_lowercase(),
                    std::io::stderr,
                )),
        ),
    })
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &HadesConfig) -> Result<(), AppError> {
    tracing::subscriber::set_global_default(subscriber(config)?)
        .map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
