//! HTTP client for the guild REST endpoints

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::models::{GuildInfo, RaidBossesEnvelope, RaidProgressEnvelope, RosterEnvelope};
use crate::params::{GuildParams, RaidBossesParams};

/// Client bound to one server base URL. One GET per call, no retry.
#[derive(Debug, Clone)]
pub struct GuildApiClient {
    client: Client,
    base_url: Url,
}

impl GuildApiClient {
    /// Endpoint paths are appended to the base path, so a server mounted
    /// under a prefix (`https://host/site`) keeps it.
    ///
    /// # Errors
    /// `InvalidUrl` if `base_url` does not parse or cannot take a path;
    /// `Http` if the client cannot be built
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!("{base_url}: not a base URL")));
        }
        Ok(Self { client, base_url })
    }

    #[instrument(skip(self))]
    pub async fn fetch_guild_info(&self, params: &GuildParams) -> Result<GuildInfo, ClientError> {
        self.get("/api/guild", &params.pairs()).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_roster(&self, params: &GuildParams) -> Result<RosterEnvelope, ClientError> {
        self.get("/api/roster", &params.pairs()).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_raid_progress(
        &self,
        params: &GuildParams,
    ) -> Result<RaidProgressEnvelope, ClientError> {
        self.get("/api/raid-progress", &params.pairs()).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_raid_bosses(
        &self,
        params: &RaidBossesParams,
    ) -> Result<RaidBossesEnvelope, ClientError> {
        self.get("/api/raid-bosses", &params.pairs()).await
    }

    /// Full request URL for a path and query pairs
    pub fn url_for(&self, path: &str, pairs: &[(&'static str, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, ClientError> {
        let url = self.url_for(path, pairs);
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}
