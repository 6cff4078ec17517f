//! Startup diagnostics checkpoint.
//!
//! One structured summary of the resolved configuration, emitted after a
//! successful resolution. Secret material never appears here, not even
//! truncated: the database target is rendered without credentials.

use crate::settings::Settings;

/// Emit the startup summary for a resolved configuration.
pub fn log_startup_summary(settings: &Settings) {
    tracing::info!(
        debug = settings.app.debug,
        allowed_hosts = ?settings.app.allowed_hosts,
        database = %settings.database.redacted_url(),
        cors_origins = ?settings.cors.allowed_origins,
        csrf_trusted_origins = ?settings.csrf.trusted_origins,
        ssl_redirect = settings.security.ssl_redirect,
        media_storage = settings.media.cloudinary.is_some(),
        page_size = settings.api.page_size,
        "configuration resolved"
    );
}
