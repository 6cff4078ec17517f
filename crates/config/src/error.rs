//! Error types for configuration resolution.
//!
//! Resolution happens once, synchronously, at process start. Every variant
//! here is fatal: a process missing its database or signing secret must not
//! serve traffic, so there is no retry and no partial-startup mode.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while resolving the startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("{name} is not set in the environment")]
    MissingVar { name: &'static str },

    /// `DATABASE_URL` is absent. The message names the environment file that
    /// was tried so deployment mistakes are easy to trace.
    #[error(
        "DATABASE_URL is not set; add a PostgreSQL connection string to the \
         environment or to {env_path}"
    )]
    MissingDatabaseUrl { env_path: PathBuf },

    /// `DATABASE_URL` is set but is not a parsable connection URL.
    #[error("failed to parse DATABASE_URL: {source}")]
    InvalidDatabaseUrl {
        #[source]
        source: url::ParseError,
    },

    /// The connection URL names an engine outside the PostgreSQL family.
    #[error("database engine must be PostgreSQL, got: {engine}")]
    UnsupportedEngine { engine: String },

    /// A variable is set but its value is unusable.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    /// A prefixed environment section failed to deserialize.
    #[error("environment section error: {0}")]
    Section(#[from] envy::Error),
}

/// Result type alias using ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_message() {
        let err = ConfigError::MissingVar {
            name: "STOREFRONT_SECRET_KEY",
        };
        assert_eq!(
            err.to_string(),
            "STOREFRONT_SECRET_KEY is not set in the environment"
        );
    }

    #[test]
    fn test_missing_database_url_names_env_path() {
        let err = ConfigError::MissingDatabaseUrl {
            env_path: PathBuf::from("/srv/storefront/.env"),
        };
        assert!(err.to_string().contains("/srv/storefront/.env"));
    }

    #[test]
    fn test_unsupported_engine_names_engine() {
        let err = ConfigError::UnsupportedEngine {
            engine: "redis".to_string(),
        };
        assert!(err.to_string().contains("redis"));
    }
}
