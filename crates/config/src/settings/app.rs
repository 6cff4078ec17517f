//! Core application settings: signing secret, debug flag, allowed hosts, and
//! the scalar sections (API defaults, admin branding, locale).

use serde::{Deserialize, Serialize};

use crate::env::EnvSnapshot;
use crate::error::{ConfigError, ConfigResult};
use crate::secret::Secret;

/// Variable holding the application signing secret.
pub const SECRET_KEY_VAR: &str = "STOREFRONT_SECRET_KEY";
/// Variable enabling debug mode.
pub const DEBUG_VAR: &str = "STOREFRONT_DEBUG";
/// Comma-separated extra allowed hosts.
pub const ALLOWED_HOSTS_VAR: &str = "STOREFRONT_ALLOWED_HOSTS";

/// Hosts every deployment accepts: the Railway subdomain wildcard plus loopback.
const DEFAULT_ALLOWED_HOSTS: &[&str] = &[".railway.app", "localhost", "127.0.0.1", "[::1]"];

/// Split a comma-separated variable into trimmed, non-empty entries.
///
/// Order is preserved and duplicates are kept; the resulting lists are
/// allowlists where both are harmless.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Settings every other section hangs off: the signing secret, the debug
/// flag, and the host allowlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSettings {
    pub secret_key: Secret,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
}

impl AppSettings {
    pub fn resolve(env: &EnvSnapshot) -> ConfigResult<Self> {
        let secret_key = env
            .get_nonempty(SECRET_KEY_VAR)
            .map(Secret::new)
            .ok_or(ConfigError::MissingVar {
                name: SECRET_KEY_VAR,
            })?;

        // Only the exact literal "True" enables debug mode; "true", "1", and
        // everything else leave it off.
        let debug = env.get(DEBUG_VAR) == Some("True");

        let mut allowed_hosts = split_list(env.get(ALLOWED_HOSTS_VAR).unwrap_or(""));
        allowed_hosts.extend(DEFAULT_ALLOWED_HOSTS.iter().map(|host| host.to_string()));

        Ok(Self {
            secret_key,
            debug,
            allowed_hosts,
        })
    }
}

/// API-wide defaults consumed by the REST layer.
///
/// Loaded via `envy::prefixed("API_")`: `API_PAGE_SIZE` overrides the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Default page size for paginated list endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl ApiSettings {
    pub fn resolve(env: &EnvSnapshot) -> ConfigResult<Self> {
        Ok(envy::prefixed("API_").from_iter(env.iter_owned())?)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Branding for the admin panel shell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminSettings {
    pub site_title: String,
    pub site_header: String,
    pub brand: String,
    pub welcome_sign: String,
    pub show_sidebar: bool,
    pub navigation_expanded: bool,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            site_title: "Administration".to_string(),
            site_header: "Administration".to_string(),
            brand: "Admin".to_string(),
            welcome_sign: "Welcome to the admin panel".to_string(),
            show_sidebar: true,
            navigation_expanded: false,
        }
    }
}

/// Language and timezone handling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleSettings {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_l10n: bool,
    pub use_tz: bool,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            language_code: "en-us".to_string(),
            time_zone: "Asia/Karachi".to_string(),
            use_i18n: true,
            use_l10n: true,
            use_tz: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_secret(extra: &[(&str, &str)]) -> EnvSnapshot {
        let mut pairs = vec![(SECRET_KEY_VAR, "s3cr3t")];
        pairs.extend_from_slice(extra);
        pairs.into_iter().collect()
    }

    #[test]
    fn test_missing_secret_key_is_fatal() {
        let env = EnvSnapshot::default();
        let err = AppSettings::resolve(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { name } if name == SECRET_KEY_VAR));
    }

    #[test]
    fn test_debug_requires_exact_literal() {
        for value in ["true", "1", "", "TRUE", "yes"] {
            let env = env_with_secret(&[(DEBUG_VAR, value)]);
            let app = AppSettings::resolve(&env).unwrap();
            assert!(!app.debug, "{value:?} should not enable debug");
        }

        let env = env_with_secret(&[(DEBUG_VAR, "True")]);
        assert!(AppSettings::resolve(&env).unwrap().debug);

        let env = env_with_secret(&[]);
        assert!(!AppSettings::resolve(&env).unwrap().debug);
    }

    #[test]
    fn test_allowed_hosts_union_defaults() {
        let env = env_with_secret(&[(ALLOWED_HOSTS_VAR, "a.com, b.com")]);
        let app = AppSettings::resolve(&env).unwrap();
        assert!(app.allowed_hosts.contains(&"a.com".to_string()));
        assert!(app.allowed_hosts.contains(&"b.com".to_string()));
        assert!(app.allowed_hosts.contains(&".railway.app".to_string()));
        assert!(app.allowed_hosts.contains(&"localhost".to_string()));
        assert!(app.allowed_hosts.iter().all(|host| !host.is_empty()));
        // Env-supplied hosts come first, defaults after.
        assert_eq!(app.allowed_hosts[0], "a.com");
    }

    #[test]
    fn test_allowed_hosts_drop_empty_entries() {
        let env = env_with_secret(&[(ALLOWED_HOSTS_VAR, "a.com,,  ,b.com,")]);
        let app = AppSettings::resolve(&env).unwrap();
        let custom: Vec<_> = app
            .allowed_hosts
            .iter()
            .filter(|host| !DEFAULT_ALLOWED_HOSTS.contains(&host.as_str()))
            .collect();
        assert_eq!(custom, ["a.com", "b.com"]);
    }

    #[test]
    fn test_api_page_size_default_and_override() {
        let api = ApiSettings::resolve(&EnvSnapshot::default()).unwrap();
        assert_eq!(api.page_size, 10);

        let env: EnvSnapshot = [("API_PAGE_SIZE", "25")].into_iter().collect();
        let api = ApiSettings::resolve(&env).unwrap();
        assert_eq!(api.page_size, 25);
    }

    #[test]
    fn test_admin_defaults() {
        let admin = AdminSettings::default();
        assert_eq!(admin.site_title, "Administration");
        assert!(admin.show_sidebar);
        assert!(!admin.navigation_expanded);
    }
}
