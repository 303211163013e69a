use crate::config::TelemetryConfig;
use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter directive for the requested verbosity.
///
/// `-v` asks for info, `-vv` for debug, more for trace. The flag only ever makes
/// output more verbose: a configured level that is already finer is kept, and a
/// target-specific directive is passed through untouched.
pub fn directive_for(config: &TelemetryConfig, verbosity: u8) -> String {
    let requested = match verbosity {
        0 => return config.log_level.clone(),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    match config.log_level.trim().parse::<LevelFilter>() {
        Ok(configured) => configured.max(requested).to_string().to_ascii_lowercase(),
        Err(_) => config.log_level.clone(),
    }
}

/// Installs the global subscriber on stderr; stdout carries the checklist output.
///
/// `RUST_LOG` wins over both the configured level and the verbosity flag.
pub fn init(config: &TelemetryConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = directive_for(config, verbosity);
            EnvFilter::try_new(&directive).map_err(|source| TelemetryError::EnvFilter {
                value: directive,
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
