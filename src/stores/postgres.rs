//! Postgres connection setup.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use crate::config::DatabaseConfig;

/// Open a connection pool and verify liveness with a round trip.
///
/// Fails fast on any connection or probe error so a misconfigured database
/// surfaces at startup rather than on the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(PgSslMode::Disable);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    // Liveness probe, the pool connects lazily per connection otherwise.
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
