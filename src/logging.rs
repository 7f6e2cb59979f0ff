//! Installs a `tracing` subscriber so array warnings reach a writer.
//!
//! The array reports failures such as out-of-bounds removals through
//! `tracing`. Applications that do not already install a subscriber can call
//! [`init`] once at startup. Output goes to stderr unless
//! [`LogConfig::writer`] points somewhere else.

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Configuration for the subscriber built by [`subscriber`] and [`init`].
#[derive(Debug)]
pub struct LogConfig<'a> {
    /// Filter used when `RUST_LOG` is not set, e.g. `"warn"` or
    /// `"holdall_core=debug"`.
    pub default_directive: &'a str,
    /// Whether to print the event target (module path) in each line.
    pub with_target: bool,
    /// Where formatted events are written. Defaults to stderr.
    pub writer: BoxMakeWriter,
}

impl Default for LogConfig<'_> {
    fn default() -> Self {
        Self {
            default_directive: "warn",
            with_target: false,
            writer: BoxMakeWriter::new(std::io::stderr),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log directive")]
    InvalidDirective(#[from] ParseError),

    #[error("a global subscriber is already installed")]
    AlreadyInitialized(#[source] TryInitError),
}

/// Builds the filter: `RUST_LOG` wins, otherwise `default_directive`.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_directive)?),
    }
}

/// Builds a compact subscriber without installing it.
pub fn subscriber(config: LogConfig<'_>) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let filter = env_filter(config.default_directive)?;

    Ok(fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(config.writer)
        .with_target(config.with_target)
        .without_time()
        .finish())
}

/// Installs the subscriber described by `config` as the global default.
pub fn init(config: LogConfig<'_>) -> Result<(), LoggingError> {
    subscriber(config)?
        .try_init()
        .map_err(LoggingError::AlreadyInitialized)
}
