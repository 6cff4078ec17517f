//! Transport-security flags and token settings.

use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::env::EnvSnapshot;
use crate::error::ConfigResult;
use crate::secret::Secret;

/// Header trusted to carry the original scheme behind the platform proxy.
pub const PROXY_SSL_HEADER: (&str, &str) = ("x-forwarded-proto", "https");

/// Transport protections, enabled exactly when debug mode is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransportSecurity {
    /// Redirect plaintext requests to HTTPS.
    pub ssl_redirect: bool,
    pub session_cookie_secure: bool,
    pub csrf_cookie_secure: bool,
}

impl TransportSecurity {
    pub fn from_debug(debug: bool) -> Self {
        let secure = !debug;
        Self {
            ssl_redirect: secure,
            session_cookie_secure: secure,
            csrf_cookie_secure: secure,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JwtEnv {
    #[serde(default = "default_access_ttl_minutes")]
    access_ttl_minutes: u64,
    #[serde(default = "default_refresh_ttl_days")]
    refresh_ttl_days: u64,
    #[serde(default = "default_header_type")]
    header_type: String,
}

fn default_access_ttl_minutes() -> u64 {
    60
}

fn default_refresh_ttl_days() -> u64 {
    1
}

fn default_header_type() -> String {
    "Bearer".to_string()
}

/// Token issuance settings consumed by the API's auth layer.
///
/// Overrides via `envy::prefixed("JWT_")`: `JWT_ACCESS_TTL_MINUTES`,
/// `JWT_REFRESH_TTL_DAYS`, `JWT_HEADER_TYPE`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JwtSettings {
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    /// Scheme expected in the Authorization header.
    pub header_type: String,
}

impl JwtSettings {
    pub fn resolve(env: &EnvSnapshot) -> ConfigResult<Self> {
        let raw: JwtEnv = envy::prefixed("JWT_").from_iter(env.iter_owned())?;
        Ok(Self {
            access_ttl: Duration::from_secs(raw.access_ttl_minutes * 60),
            refresh_ttl: Duration::from_secs(raw.refresh_ttl_days * 24 * 60 * 60),
            header_type: raw.header_type,
        })
    }

    /// Signing key derived from the application secret.
    pub fn encoding_key(&self, secret: &Secret) -> EncodingKey {
        EncodingKey::from_secret(secret.expose().as_bytes())
    }

    /// Verification key derived from the application secret.
    pub fn decoding_key(&self, secret: &Secret) -> DecodingKey {
        DecodingKey::from_secret(secret.expose().as_bytes())
    }

    /// Validation parameters for access tokens.
    pub fn validation(&self) -> Validation {
        Validation::new(Algorithm::HS256)
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            access_ttl: Duration::from_secs(default_access_ttl_minutes() * 60),
            refresh_ttl: Duration::from_secs(default_refresh_ttl_days() * 24 * 60 * 60),
            header_type: default_header_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protections_follow_debug_flag() {
        let secure = TransportSecurity::from_debug(false);
        assert!(secure.ssl_redirect);
        assert!(secure.session_cookie_secure);
        assert!(secure.csrf_cookie_secure);

        let relaxed = TransportSecurity::from_debug(true);
        assert!(!relaxed.ssl_redirect);
        assert!(!relaxed.session_cookie_secure);
        assert!(!relaxed.csrf_cookie_secure);
    }

    #[test]
    fn test_jwt_defaults() {
        let jwt = JwtSettings::resolve(&EnvSnapshot::default()).unwrap();
        assert_eq!(jwt.access_ttl, Duration::from_secs(60 * 60));
        assert_eq!(jwt.refresh_ttl, Duration::from_secs(24 * 60 * 60));
        assert_eq!(jwt.header_type, "Bearer");
        assert_eq!(jwt, JwtSettings::default());
    }

    #[test]
    fn test_jwt_env_overrides() {
        let env: EnvSnapshot = [
            ("JWT_ACCESS_TTL_MINUTES", "5"),
            ("JWT_REFRESH_TTL_DAYS", "7"),
            ("JWT_HEADER_TYPE", "Token"),
        ]
        .into_iter()
        .collect();
        let jwt = JwtSettings::resolve(&env).unwrap();
        assert_eq!(jwt.access_ttl, Duration::from_secs(5 * 60));
        assert_eq!(jwt.refresh_ttl, Duration::from_secs(7 * 24 * 60 * 60));
        assert_eq!(jwt.header_type, "Token");
    }

    #[test]
    fn test_keys_round_trip_a_token() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Claims {
            sub: String,
            exp: u64,
        }

        let jwt = JwtSettings::default();
        let secret = Secret::new("s3cr3t");
        let claims = Claims {
            sub: "user-1".to_string(),
            exp: 4_102_444_800, // far future
        };

        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jwt.encoding_key(&secret),
        )
        .unwrap();

        let decoded = jsonwebtoken::decode::<Claims>(
            &token,
            &jwt.decoding_key(&secret),
            &jwt.validation(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, "user-1");
    }
}
