//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use guild_core::{GuildKey, Region};
use secrecy::SecretString;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

use super::database::{DatabaseConfig, PoolConfig};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub pool: PoolConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub guild: GuildDefaults,
    pub sync: SyncConfig,
    pub battle_net: Option<BattleNetConfig>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" | "dev" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// The guild served when a request leaves name/realm/region out
#[derive(Debug, Clone, Deserialize)]
pub struct GuildDefaults {
    #[serde(default = "default_guild_name")]
    pub name: String,
    #[serde(default = "default_guild_realm")]
    pub realm: String,
    #[serde(default)]
    pub region: Region,
}

impl GuildDefaults {
    #[must_use]
    pub fn key(&self) -> GuildKey {
        GuildKey::new(&self.name, &self.realm, self.region)
    }
}

impl Default for GuildDefaults {
    fn default() -> Self {
        Self {
            name: default_guild_name(),
            realm: default_guild_realm(),
            region: Region::default(),
        }
    }
}

/// External data refresh settings
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_sync_interval_secs")]
    pub interval_secs: u64,
    /// Raider.io raid slugs to pull encounter data for
    #[serde(default = "default_sync_raids")]
    pub raids: Vec<String>,
    #[serde(default = "default_expansion_id")]
    pub expansion_id: u32,
    /// Shared secret for the on-demand sync endpoint; endpoint is off when unset
    #[serde(default)]
    pub token: Option<SecretString>,
    #[serde(default = "default_raider_io_base_url")]
    pub raider_io_base_url: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_sync_interval_secs(),
            raids: default_sync_raids(),
            expansion_id: default_expansion_id(),
            token: None,
            raider_io_base_url: default_raider_io_base_url(),
        }
    }
}

/// Battle.net API client credentials
#[derive(Debug, Clone, Deserialize)]
pub struct BattleNetConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    #[serde(default)]
    pub callback_url: Option<String>,
}

// Default value functions
fn default_app_name() -> String {
    "guild-site".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_guild_name() -> String {
    "Guttakrutt".to_string()
}

fn default_guild_realm() -> String {
    "Tarren Mill".to_string()
}

fn default_sync_interval_secs() -> u64 {
    3600
}

fn default_sync_raids() -> Vec<String> {
    vec![
        "liberation-of-undermine".to_string(),
        "nerubar-palace".to_string(),
    ]
}

fn default_expansion_id() -> u32 {
    10
}

fn default_raider_io_base_url() -> String {
    "https://raider.io/api/v1/".to_string()
}

/// Parse an optional variable, rejecting values that are present but malformed
pub(crate) fn lookup_parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(None),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is required but missing, or set but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = match lookup("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => default_env(),
        };

        let region = match lookup("GUILD_REGION") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GUILD_REGION", raw))?,
            None => Region::default(),
        };

        let battle_net = match (lookup("BNET_CLIENT_ID"), lookup("BNET_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(BattleNetConfig {
                client_id,
                client_secret: client_secret.into(),
                callback_url: lookup("BNET_CALLBACK_URL"),
            }),
            (Some(_), None) => return Err(ConfigError::MissingVar("BNET_CLIENT_SECRET")),
            (None, Some(_)) => return Err(ConfigError::MissingVar("BNET_CLIENT_ID")),
            (None, None) => None,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: lookup_parse(lookup, "API_PORT")?.unwrap_or_else(default_port),
            },
            database: DatabaseConfig::from_lookup(lookup)?,
            pool: PoolConfig::from_lookup(lookup)?,
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| split_list(&s))
                    .unwrap_or_default(),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: lookup_parse(lookup, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: lookup_parse(lookup, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            guild: GuildDefaults {
                name: lookup("GUILD_NAME").unwrap_or_else(default_guild_name),
                realm: lookup("GUILD_REALM").unwrap_or_else(default_guild_realm),
                region,
            },
            sync: SyncConfig {
                enabled: lookup_parse(lookup, "SYNC_ENABLED")?.unwrap_or(false),
                interval_secs: lookup_parse(lookup, "SYNC_INTERVAL_SECS")?
                    .unwrap_or_else(default_sync_interval_secs),
                raids: lookup("SYNC_RAIDS")
                    .map(|s| split_list(&s))
                    .unwrap_or_else(default_sync_raids),
                expansion_id: lookup_parse(lookup, "SYNC_EXPANSION_ID")?
                    .unwrap_or_else(default_expansion_id),
                token: lookup("SYNC_TOKEN")
                    .filter(|t| !t.is_empty())
                    .map(SecretString::from),
                raider_io_base_url: lookup("RAIDER_IO_BASE_URL")
                    .unwrap_or_else(default_raider_io_base_url),
            },
            battle_net,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
