//! Battle.net profile API client
//!
//! Authenticates with the client-credentials flow. The access token is cached
//! and refreshed shortly before it expires.

pub mod models;

use std::time::Duration;

use guild_common::BattleNetConfig;
use guild_core::{GuildKey, Region};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::endpoint::{read_json, Endpoint};
use crate::error::SourceError;

use models::{BnetGuild, BnetRoster, TokenResponse};

const SERVICE: &str = "battle.net";

/// Refresh this long before the reported expiry
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct CachedToken {
    access_token: SecretString,
    expires_at: Instant,
}

/// Battle.net API client
#[derive(Debug)]
pub struct BattleNetClient {
    client: Client,
    client_id: String,
    client_secret: SecretString,
    token_url: String,
    /// Fixed API base; per-region hosts are used when unset
    api: Option<Endpoint>,
    token: Mutex<Option<CachedToken>>,
}

impl BattleNetClient {
    /// Create a client for the public endpoints
    pub fn new(config: &BattleNetConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SourceError::http(SERVICE))?;

        Ok(Self {
            client,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: "https://oauth.battle.net/token".to_string(),
            api: None,
            token: Mutex::new(None),
        })
    }

    /// Create a client against explicit token and API base URLs
    pub fn with_endpoints(
        client: Client,
        config: &BattleNetConfig,
        token_url: impl Into<String>,
        api_url: &str,
    ) -> Self {
        Self {
            client,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: token_url.into(),
            api: Some(Endpoint::new(api_url)),
            token: Mutex::new(None),
        }
    }

    /// Profile API host of a region, unless an explicit endpoint was given
    fn api_for(&self, region: Region) -> Endpoint {
        match (&self.api, region) {
            (Some(endpoint), _) => endpoint.clone(),
            (None, Region::Cn) => Endpoint::new("https://gateway.battlenet.com.cn/"),
            (None, other) => Endpoint::new(format!("https://{other}.api.blizzard.com/")),
        }
    }

    /// A valid access token, fetching a new one when the cache is empty or stale
    async fn access_token(&self) -> Result<SecretString, SourceError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() + EXPIRY_MARGIN < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(SourceError::http(SERVICE))?;

        let token: TokenResponse = read_json(SERVICE, || "client credentials".to_string(), response)
            .await
            .map_err(|err| match err {
                SourceError::NotFound { .. } | SourceError::Status { .. } => SourceError::Auth {
                    service: SERVICE,
                    message: err.to_string(),
                },
                other => other,
            })?;

        debug!(expires_in = token.expires_in, "Fetched Battle.net access token");

        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        });

        Ok(access_token)
    }

    async fn get_profile<M>(&self, key: &GuildKey, suffix: &str) -> Result<M, SourceError>
    where
        M: serde::de::DeserializeOwned,
    {
        let token = self.access_token().await?;
        let path = format!(
            "data/wow/guild/{}/{}{suffix}",
            key.realm_slug(),
            key.name_slug()
        );

        let response = self
            .client
            .get(self.api_for(key.region).append_path(&path))
            .query(&[
                ("namespace", format!("profile-{}", key.region)),
                ("locale", key.region.locale().to_string()),
            ])
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(SourceError::http(SERVICE))?;

        read_json(SERVICE, || format!("guild {key}"), response).await
    }

    /// Guild profile: faction and member count
    #[instrument(skip(self), fields(guild = %key))]
    pub async fn guild(&self, key: &GuildKey) -> Result<BnetGuild, SourceError> {
        self.get_profile(key, "").await
    }

    /// Guild roster with Blizzard ids, levels, ranks and class ids
    #[instrument(skip(self), fields(guild = %key))]
    pub async fn roster(&self, key: &GuildKey) -> Result<BnetRoster, SourceError> {
        self.get_profile(key, "/roster").await
    }
}
