//! PostgreSQL connection pool

use guild_common::PostgresConfig;
use secrecy::ExposeSecret;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{check_liveness, PoolSettings};

/// Build a PostgreSQL pool from a connection string
pub(super) async fn connect(config: &PostgresConfig, settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(config.connection_string.expose_secret())
        .await
}

pub(super) async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let value = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    check_liveness(i64::from(value))
}
