//! Raid service
//!
//! Progress per raid and difficulty, and per-boss kill data.

use guild_core::{Difficulty, GuildKey};
use tracing::instrument;

use crate::dto::{RaidBossResponse, RaidBossesResponse, RaidProgressListResponse, RaidProgressResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guild::GuildService;

/// Raid service
pub struct RaidService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RaidService<'a> {
    /// Create a new RaidService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get every progress row of a guild
    #[instrument(skip(self))]
    pub async fn get_progress(&self, key: &GuildKey) -> ServiceResult<RaidProgressListResponse> {
        let guild = GuildService::new(self.ctx).get_guild_entity(key).await?;
        let progresses = self.ctx.raid_progress_repo().find_by_guild(guild.id).await?;

        Ok(RaidProgressListResponse::new(
            progresses.iter().map(RaidProgressResponse::from).collect(),
        ))
    }

    /// Get the bosses of one raid, matched by display name or slug, in encounter order
    #[instrument(skip(self))]
    pub async fn get_bosses(
        &self,
        key: &GuildKey,
        raid: &str,
        difficulty: Difficulty,
    ) -> ServiceResult<RaidBossesResponse> {
        let raid = raid.trim();
        if raid.is_empty() {
            return Err(ServiceError::validation("Raid name is required"));
        }

        let guild = GuildService::new(self.ctx).get_guild_entity(key).await?;
        let mut bosses = self
            .ctx
            .raid_boss_repo()
            .find_by_raid(guild.id, raid, difficulty)
            .await?;
        bosses.sort_by_key(|boss| boss.position);

        Ok(RaidBossesResponse::new(
            bosses.iter().map(RaidBossResponse::from).collect(),
        ))
    }
}
