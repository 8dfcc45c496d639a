//! Database configuration
//!
//! The backend is a tagged variant: a Postgres connection string or a set
//! of MySQL connection parameters. `guild-db` dispatches on the tag at startup.

use secrecy::SecretString;
use serde::Deserialize;

use super::app_config::{lookup_parse, ConfigError};

/// Database backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfig {
    Postgres(PostgresConfig),
    #[serde(rename = "mysql")]
    MySql(MySqlConfig),
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct PostgresConfig {
    pub connection_string: SecretString,
}

/// MySQL connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct MySqlConfig {
    #[serde(default = "default_mysql_host")]
    pub host: String,
    #[serde(default = "default_mysql_port")]
    pub port: u16,
    #[serde(default = "default_mysql_user")]
    pub user: String,
    #[serde(default = "default_mysql_password")]
    pub password: SecretString,
    #[serde(default = "default_mysql_database")]
    pub database: String,
}

/// Connection pool tuning shared by both backends
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub run_migrations: bool,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

fn default_mysql_host() -> String {
    "localhost".to_string()
}

fn default_mysql_port() -> u16 {
    3306
}

fn default_mysql_user() -> String {
    "root".to_string()
}

fn default_mysql_password() -> SecretString {
    SecretString::from(String::new())
}

fn default_mysql_database() -> String {
    "guttakrutt".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    60
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

impl DatabaseConfig {
    /// Resolve the backend from `DATABASE_TYPE`, `DATABASE_URL` and `MYSQL_*`
    ///
    /// Without `DATABASE_TYPE`, a set `DATABASE_URL` selects Postgres and
    /// everything else falls back to MySQL with defaulted parameters.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL");

        match lookup("DATABASE_TYPE").map(|s| s.to_lowercase()).as_deref() {
            Some("postgres" | "postgresql") => url
                .map(|url| {
                    Self::Postgres(PostgresConfig {
                        connection_string: url.into(),
                    })
                })
                .ok_or(ConfigError::MissingVar("DATABASE_URL")),
            Some("mysql") => Ok(Self::MySql(MySqlConfig::from_lookup(lookup)?)),
            Some(other) => Err(ConfigError::InvalidValue("DATABASE_TYPE", other.to_string())),
            None => match url {
                Some(url) => Ok(Self::Postgres(PostgresConfig {
                    connection_string: url.into(),
                })),
                None => Ok(Self::MySql(MySqlConfig::from_lookup(lookup)?)),
            },
        }
    }

    /// Short backend name for logs
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::MySql(_) => "mysql",
        }
    }
}

impl MySqlConfig {
    /// Read `MYSQL_*` variables, each with a hardcoded fallback
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("MYSQL_HOST").unwrap_or_else(default_mysql_host),
            port: lookup_parse(lookup, "MYSQL_PORT")?.unwrap_or_else(default_mysql_port),
            user: lookup("MYSQL_USER").unwrap_or_else(default_mysql_user),
            password: lookup("MYSQL_PASSWORD").unwrap_or_default().into(),
            database: lookup("MYSQL_DATABASE").unwrap_or_else(default_mysql_database),
        })
    }
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            host: default_mysql_host(),
            port: default_mysql_port(),
            user: default_mysql_user(),
            password: default_mysql_password(),
            database: default_mysql_database(),
        }
    }
}

impl PoolConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            max_connections: lookup_parse(lookup, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or_else(default_max_connections),
            acquire_timeout_secs: lookup_parse(lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS")?
                .unwrap_or_else(default_acquire_timeout_secs),
            run_migrations: lookup_parse(lookup, "DATABASE_RUN_MIGRATIONS")?.unwrap_or(false),
            migrations_dir: lookup("DATABASE_MIGRATIONS_DIR").unwrap_or_else(default_migrations_dir),
        })
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            run_migrations: false,
            migrations_dir: default_migrations_dir(),
        }
    }
}
