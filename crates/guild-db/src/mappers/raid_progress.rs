//! Raid progress entity <-> model mapper

use guild_core::entities::RaidProgress;
use guild_core::error::DomainError;

use crate::models::RaidProgressModel;

impl TryFrom<RaidProgressModel> for RaidProgress {
    type Error = DomainError;

    fn try_from(model: RaidProgressModel) -> Result<Self, Self::Error> {
        let progress = RaidProgress {
            id: model.id,
            guild_id: model.guild_id,
            raid_name: model.raid_name,
            raid_slug: model.raid_slug,
            difficulty: model.difficulty.parse()?,
            bosses: model.bosses,
            bosses_defeated: model.bosses_defeated,
            world_rank: model.world_rank,
            region_rank: model.region_rank,
            realm_rank: model.realm_rank,
            last_updated: model.last_updated,
        };
        progress.validate()?;
        Ok(progress)
    }
}

/// Raid progress values bound by an upsert
pub struct RaidProgressUpsert<'a> {
    pub guild_id: i64,
    pub raid_name: &'a str,
    pub raid_slug: &'a str,
    pub difficulty: &'static str,
    pub bosses: i32,
    pub bosses_defeated: i32,
    pub world_rank: Option<i32>,
    pub region_rank: Option<i32>,
    pub realm_rank: Option<i32>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl<'a> RaidProgressUpsert<'a> {
    /// Borrow upsert values, rejecting progress that breaks the boss count invariant
    pub fn new(progress: &'a RaidProgress) -> Result<Self, DomainError> {
        progress.validate()?;
        Ok(Self {
            guild_id: progress.guild_id,
            raid_name: &progress.raid_name,
            raid_slug: &progress.raid_slug,
            difficulty: progress.difficulty.as_str(),
            bosses: progress.bosses,
            bosses_defeated: progress.bosses_defeated,
            world_rank: progress.world_rank,
            region_rank: progress.region_rank,
            realm_rank: progress.realm_rank,
            last_updated: progress.last_updated,
        })
    }
}
