//! Guild service
//!
//! Guild lookups by natural key.

use guild_core::entities::Guild;
use guild_core::{DomainError, GuildKey};
use tracing::instrument;

use crate::dto::GuildResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Guild service
pub struct GuildService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildService<'a> {
    /// Create a new GuildService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a guild profile by name, realm and region
    #[instrument(skip(self))]
    pub async fn get_guild(&self, key: &GuildKey) -> ServiceResult<GuildResponse> {
        let guild = self.get_guild_entity(key).await?;
        Ok(GuildResponse::from(&guild))
    }

    /// Get the guild entity, failing with `UNKNOWN_GUILD` when absent
    #[instrument(skip(self))]
    pub async fn get_guild_entity(&self, key: &GuildKey) -> ServiceResult<Guild> {
        let guild = self
            .ctx
            .guild_repo()
            .find_by_key(key)
            .await?
            .ok_or_else(|| DomainError::GuildNotFound(key.clone()))?;

        Ok(guild)
    }
}
