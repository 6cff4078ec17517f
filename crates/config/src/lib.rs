//! Storefront Backend Configuration
//!
//! This crate resolves the storefront backend's runtime configuration from
//! the process environment in a single pass at startup, failing fast when a
//! required value is missing or malformed. It owns:
//!
//! - **Environment loading**: `.env` handling and an immutable
//!   [`EnvSnapshot`] threaded explicitly into every resolver
//! - **Database settings**: `DATABASE_URL` parsing into a structured
//!   [`settings::ConnectionDescriptor`] with engine validation and sqlx
//!   connect/pool adapters
//! - **Origin lists**: allowed hosts, CORS origins, CSRF trusted origins
//! - **Security glue**: transport flags derived from the debug mode, JWT key
//!   material built from the signing secret
//! - **Startup diagnostics**: a single structured, secret-free checkpoint
//!
//! ## Modules
//!
//! - [`env`]: environment snapshot and `.env` loading
//! - [`settings`]: the configuration resolver and all settings sections
//! - [`db`]: connection pool creation from resolved database settings
//! - [`error`]: the fatal [`ConfigError`] type
//! - [`report`]: startup summary logging
//! - [`secret`]: redacting wrapper for secret values
//!
//! ## Example
//!
//! ```ignore
//! use std::path::Path;
//! use storefront_config::Settings;
//!
//! let settings = Settings::load(Path::new("."))?;
//! let pool = storefront_config::db::create_pool(&settings.database).await?;
//! let cors = settings.cors.layer();
//! ```

pub mod db;
pub mod env;
pub mod error;
pub mod report;
pub mod secret;
pub mod settings;

pub use env::{load_env_file, EnvFileStatus, EnvSnapshot};
pub use error::{ConfigError, ConfigResult};
pub use secret::Secret;
pub use settings::Settings;
