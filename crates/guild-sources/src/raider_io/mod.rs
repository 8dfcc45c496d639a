//! Raider.io public API client

pub mod models;

use std::time::Duration;

use guild_core::{Difficulty, GuildKey};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::endpoint::{read_json, Endpoint};
use crate::error::SourceError;

use models::{EncounterKill, GuildProfile, RaidStaticData};

const SERVICE: &str = "raider.io";

/// Raider.io API client
#[derive(Debug, Clone)]
pub struct RaiderIoClient {
    client: Client,
    endpoint: Endpoint,
}

impl RaiderIoClient {
    /// Create a client against the given base URL (e.g. `https://raider.io/api/v1/`)
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("guild-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SourceError::http(SERVICE))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: Endpoint::new(base_url),
        }
    }

    /// Raid names and encounter order for an expansion
    #[instrument(skip(self))]
    pub async fn static_data(&self, expansion_id: u32) -> Result<RaidStaticData, SourceError> {
        let response = self
            .client
            .get(self.endpoint.append_path("raiding/static-data"))
            .query(&[("expansion_id", expansion_id.to_string())])
            .send()
            .await
            .map_err(SourceError::http(SERVICE))?;

        read_json(SERVICE, || format!("expansion {expansion_id}"), response).await
    }

    /// Roster, progression and rankings of a guild
    #[instrument(skip(self), fields(guild = %key))]
    pub async fn guild_profile(&self, key: &GuildKey) -> Result<GuildProfile, SourceError> {
        self.profile(key, "members,raid_progression,raid_rankings").await
    }

    /// Kill state of every encounter of one raid at one difficulty
    #[instrument(skip(self), fields(guild = %key))]
    pub async fn raid_encounters(
        &self,
        key: &GuildKey,
        raid_slug: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<EncounterKill>, SourceError> {
        let fields = format!("raid_encounters:{raid_slug}:{difficulty}");
        let profile = self.profile(key, &fields).await?;
        debug!(count = profile.raid_encounters.len(), "Fetched raid encounters");
        Ok(profile.raid_encounters)
    }

    async fn profile(&self, key: &GuildKey, fields: &str) -> Result<GuildProfile, SourceError> {
        let response = self
            .client
            .get(self.endpoint.append_path("guilds/profile"))
            .query(&[
                ("region", key.region.as_str()),
                ("realm", key.realm_slug().as_str()),
                ("name", key.name.as_str()),
                ("fields", fields),
            ])
            .send()
            .await
            .map_err(SourceError::http(SERVICE))?;

        read_json(SERVICE, || format!("guild {key}"), response).await
    }
}
