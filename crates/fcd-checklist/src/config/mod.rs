use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::checklist::DEFAULT_STORAGE_KEY;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Loads the configuration; `state_dir_override` wins over `FCD_STATE_DIR`
    /// and the platform data directory.
    pub fn load_with(state_dir_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let state_dir = match (state_dir_override, env::var("FCD_STATE_DIR")) {
            (Some(dir), _) => dir,
            (None, Ok(dir)) if dir.trim().is_empty() => return Err(ConfigError::EmptyStateDir),
            (None, Ok(dir)) => PathBuf::from(dir),
            (None, Err(_)) => default_state_dir().ok_or(ConfigError::NoDataDir)?,
        };

        let key = env::var("FCD_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
        validate_storage_key(&key)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig { state_dir, key },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the durable answer slot.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub state_dir: PathBuf,
    pub key: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Per-user data directory, e.g. `~/.local/share/fcd-checklist` on Linux.
fn default_state_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("fcd-checklist"))
}

fn validate_storage_key(key: &str) -> Result<(), ConfigError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidStorageKey(key.to_string()))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyStateDir,
    NoDataDir,
    InvalidStorageKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyStateDir => write!(f, "FCD_STATE_DIR must not be empty"),
            ConfigError::NoDataDir => write!(
                f,
                "no per-user data directory available; set FCD_STATE_DIR or pass --state-dir"
            ),
            ConfigError::InvalidStorageKey(key) => write!(
                f,
                "FCD_STORAGE_KEY '{}' must be non-empty and use only letters, digits, '.', '_' or '-'",
                key
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
