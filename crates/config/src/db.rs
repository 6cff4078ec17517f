//! Database connection pool management.

use sqlx::PgPool;

use crate::settings::DatabaseSettings;

/// Type alias for the PostgreSQL connection pool.
pub type DbPool = PgPool;

/// Create a connection pool honoring the resolved descriptor, the connection
/// max age, and the TLS requirement.
///
/// # Errors
///
/// Returns an error if the pool cannot be created.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DbPool, sqlx::Error> {
    let pool = settings
        .pool_options()
        .connect_with(settings.connect_options())
        .await?;

    tracing::info!(
        host = %settings.descriptor.host,
        port = settings.descriptor.port,
        database = %settings.descriptor.name,
        max_age_secs = settings.conn_max_age.as_secs(),
        ssl_require = settings.ssl_require,
        "database connection pool created"
    );

    Ok(pool)
}

/// Check if the database connection is healthy.
pub async fn health_check(pool: &DbPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
