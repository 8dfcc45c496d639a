//! Configuration structs

mod app_config;
mod database;

pub use app_config::{
    AppConfig, AppSettings, BattleNetConfig, ConfigError, CorsConfig, Environment,
    GuildDefaults, RateLimitConfig, ServerConfig, SyncConfig,
};
pub use database::{DatabaseConfig, MySqlConfig, PoolConfig, PostgresConfig};
