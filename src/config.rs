//! # Survey Core Configuration
//!
//! Layered configuration built with the `config` crate. Sources, lowest
//! priority first:
//!
//! 1. Built-in defaults (and `DATABASE_URL`, when set)
//! 2. An optional TOML file, `config/survey.toml` unless a path is given
//! 3. `SURVEY__*` environment variables, e.g. `SURVEY__DATABASE__URL`
//!
//! ```rust,no_run
//! use survey_core::config::SurveyConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SurveyConfig::load(None)?;
//! println!("pool size: {}", config.database.max_connections);
//! # Ok(())
//! # }
//! ```

use crate::constants::system::{
    DEFAULT_ACQUIRE_TIMEOUT_SECONDS, DEFAULT_CONFIG_PATH, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MAX_TRANSITION_ATTEMPTS, ENV_PREFIX,
};
use crate::error::SurveyError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "postgres")]
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::path::{Path, PathBuf};
#[cfg(feature = "postgres")]
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Configuration-related errors with detailed context
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },
}

impl ConfigurationError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            context: context.into(),
        }
    }
}

impl From<ConfigurationError> for SurveyError {
    fn from(err: ConfigurationError) -> Self {
        SurveyError::Configuration(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub database: DatabaseConfig,
    pub lifecycle: LifecycleConfig,
}

/// Database connection and pooling configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

/// Survey lifecycle settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Compare-and-set attempts for a run/pause before reporting a conflict
    pub max_transition_attempts: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/survey_development".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_seconds: DEFAULT_ACQUIRE_TIMEOUT_SECONDS,
        }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            max_transition_attempts: DEFAULT_MAX_TRANSITION_ATTEMPTS,
        }
    }
}

impl SurveyConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut builder = ::config::Config::builder();
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("database.url", url)?;
        }

        let settings = builder
            .add_source(::config::File::from(path.as_path()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: SurveyConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(
            config_path = %path.display(),
            database_url = %config.database.redacted_url(),
            max_connections = config.database.max_connections,
            max_transition_attempts = config.lifecycle.max_transition_attempts,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Reject values the core cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "database.url",
                "",
                "database url must not be empty",
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigurationError::invalid_value(
                "database.max_connections",
                "0",
                "pool size must be greater than 0",
            ));
        }

        if self.lifecycle.max_transition_attempts == 0 {
            return Err(ConfigurationError::invalid_value(
                "lifecycle.max_transition_attempts",
                "0",
                "at least one transition attempt is required",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Build a connection pool from this configuration
    #[cfg(feature = "postgres")]
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_seconds))
            .connect(&self.url)
            .await
    }

    /// Database url with any password masked, for logs
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let Some((userinfo, host)) = rest.rsplit_once('@') else {
            return self.url.clone();
        };
        match userinfo.split_once(':') {
            Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
            None => self.url.clone(),
        }
    }
}
