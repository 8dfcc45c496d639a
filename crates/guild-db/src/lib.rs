//! # guild-db
//!
//! Database layer implementing the `guild-core` repository traits with SQLx.
//!
//! ## Overview
//!
//! The backend is chosen at startup from a [`DatabaseConfig`]: PostgreSQL
//! (connection string) or MySQL (host/port/user/password/database). Both share
//! one schema and one set of row models; only the SQL dialect differs.
//!
//! - Connection pool management and liveness check
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations per dialect
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guild_common::{DatabaseConfig, PoolConfig};
//! use guild_db::{Database, PoolSettings};
//!
//! async fn example(config: &DatabaseConfig, pool: &PoolConfig) -> Result<(), sqlx::Error> {
//!     let db = Database::connect(config, &PoolSettings::from(pool)).await?;
//!     let repos = db.repositories();
//!     // repos.guilds.find_by_key(...)
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use guild_common::DatabaseConfig;
pub use pool::{Database, PoolSettings};
pub use repositories::{
    MySqlCharacterRepository, MySqlGuildRepository, MySqlRaidBossRepository,
    MySqlRaidProgressRepository, PgCharacterRepository, PgGuildRepository, PgRaidBossRepository,
    PgRaidProgressRepository, Repositories,
};
