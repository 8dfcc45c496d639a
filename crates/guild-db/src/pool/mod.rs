//! Database connection pool management
//!
//! [`Database::connect`] dispatches on the configured backend, builds a pool
//! and verifies it with `SELECT 1`. There is no retry loop here; callers decide
//! what a failed connect means.

mod mysql;
mod postgres;

use std::path::Path;
use std::time::Duration;

use guild_common::{DatabaseConfig, PoolConfig};
use sqlx::migrate::Migrator;
use sqlx::{MySqlPool, PgPool};
use tracing::{info, instrument};

use crate::repositories::Repositories;

/// Pool tuning applied to either backend
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Upper bound on open connections
    pub max_connections: u32,
    /// How long a caller waits for a free connection. Waiters are not
    /// counted, only timed.
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self::from(&PoolConfig::default())
    }
}

impl From<&PoolConfig> for PoolSettings {
    fn from(config: &PoolConfig) -> Self {
        Self {
            max_connections: config.max_connections.max(1),
            acquire_timeout: Duration::from_secs(config.acquire_timeout_secs),
        }
    }
}

/// A live connection pool for one of the supported backends
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgPool),
    MySql(MySqlPool),
}

impl Database {
    /// Connect to the configured backend and run a liveness check
    ///
    /// # Errors
    /// Returns the underlying driver error if the pool cannot be built or
    /// `SELECT 1` does not come back as 1.
    #[instrument(skip_all, fields(backend = config.backend_name()))]
    pub async fn connect(config: &DatabaseConfig, settings: &PoolSettings) -> Result<Self, sqlx::Error> {
        let db = match config {
            DatabaseConfig::Postgres(pg) => Self::Postgres(postgres::connect(pg, settings).await?),
            DatabaseConfig::MySql(my) => Self::MySql(mysql::connect(my, settings).await?),
        };

        db.ping().await?;
        info!(max_connections = settings.max_connections, "Database pool ready");

        Ok(db)
    }

    /// Backend name for logs and health output
    #[must_use]
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::MySql(_) => "mysql",
        }
    }

    /// Run `SELECT 1` against the pool
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Postgres(pool) => postgres::ping(pool).await,
            Self::MySql(pool) => mysql::ping(pool).await,
        }
    }

    /// Apply the migrations for this backend found under `dir/<backend>`
    pub async fn run_migrations(&self, dir: impl AsRef<Path>) -> Result<(), sqlx::Error> {
        let path = dir.as_ref().join(self.backend());
        let migrator = Migrator::new(path.clone()).await?;

        match self {
            Self::Postgres(pool) => migrator.run(pool).await?,
            Self::MySql(pool) => migrator.run(pool).await?,
        }

        info!(path = %path.display(), "Migrations applied");
        Ok(())
    }

    /// Repository handles bound to this pool
    #[must_use]
    pub fn repositories(&self) -> Repositories {
        match self {
            Self::Postgres(pool) => Repositories::postgres(pool.clone()),
            Self::MySql(pool) => Repositories::mysql(pool.clone()),
        }
    }

    /// Close every connection in the pool
    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::MySql(pool) => pool.close().await,
        }
    }
}

/// Liveness result other than 1 is treated as a broken connection
fn check_liveness(value: i64) -> Result<(), sqlx::Error> {
    if value == 1 {
        Ok(())
    } else {
        Err(sqlx::Error::Protocol(format!(
            "liveness check returned {value}, expected 1"
        )))
    }
}
