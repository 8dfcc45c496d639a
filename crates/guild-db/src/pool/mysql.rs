//! MySQL connection pool

use guild_common::MySqlConfig;
use secrecy::ExposeSecret;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use super::{check_liveness, PoolSettings};

/// Build a MySQL pool from discrete connection parameters
///
/// Options are set field by field so passwords never need URL escaping.
pub(super) async fn connect(config: &MySqlConfig, settings: &PoolSettings) -> Result<MySqlPool, sqlx::Error> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(config.password.expose_secret())
        .database(&config.database)
        .charset("utf8mb4");

    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
}

pub(super) async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let value = sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await?;
    check_liveness(value)
}
