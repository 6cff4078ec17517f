//! Cross-origin and trusted-origin lists.
//!
//! Both lists are assembled the same way: environment entries are comma-split
//! and trimmed, empty entries dropped, fixed defaults appended. Order is
//! preserved and duplicates are tolerated.

use http::HeaderValue;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::app::split_list;
use crate::env::EnvSnapshot;
use crate::error::{ConfigError, ConfigResult};

/// Comma-separated CORS origin allowlist.
pub const CORS_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";
/// Public domain injected by the deployment platform.
pub const PUBLIC_DOMAIN_VAR: &str = "RAILWAY_PUBLIC_DOMAIN";

/// Origin served by the local frontend dev server.
const DEFAULT_DEV_ORIGIN: &str = "http://localhost:5173";

/// Trusted-submission entries every deployment keeps.
const DEFAULT_CSRF_ORIGINS: &[&str] = &[
    "https://*.railway.app",
    "http://localhost:5173",
    "http://localhost:8000",
    "http://127.0.0.1:8000",
];

/// CORS policy inputs for the HTTP stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsSettings {
    pub fn resolve(env: &EnvSnapshot) -> ConfigResult<Self> {
        let allowed_origins = match env.get_nonempty(CORS_ORIGINS_VAR) {
            Some(raw) => split_list(raw),
            None => vec![DEFAULT_DEV_ORIGIN.to_string()],
        };

        // Reject unusable origins now rather than when the middleware is built.
        for origin in &allowed_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::InvalidValue {
                    name: CORS_ORIGINS_VAR,
                    reason: format!("{origin:?} is not a valid origin header value"),
                });
            }
        }

        Ok(Self {
            allowed_origins,
            allow_credentials: true,
        })
    }

    /// CORS middleware configured with the resolved origin list.
    pub fn layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(self.allow_credentials)
    }
}

/// Origins trusted for state-changing form submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsrfSettings {
    pub trusted_origins: Vec<String>,
}

impl CsrfSettings {
    pub fn resolve(env: &EnvSnapshot) -> Self {
        let mut trusted_origins = Vec::new();
        if let Some(domain) = env.get_nonempty(PUBLIC_DOMAIN_VAR) {
            trusted_origins.push(format!("https://{domain}"));
        }
        trusted_origins.extend(DEFAULT_CSRF_ORIGINS.iter().map(|origin| origin.to_string()));
        Self { trusted_origins }
    }
}
