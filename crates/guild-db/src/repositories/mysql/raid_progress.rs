//! MySQL implementation of RaidProgressRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use guild_core::entities::RaidProgress;
use guild_core::traits::{RaidProgressRepository, RepoResult};

use crate::mappers::RaidProgressUpsert;
use crate::models::RaidProgressModel;

use super::super::error::map_db_error;

/// MySQL implementation of RaidProgressRepository
#[derive(Clone)]
pub struct MySqlRaidProgressRepository {
    pool: MySqlPool,
}

impl MySqlRaidProgressRepository {
    /// Create a new MySqlRaidProgressRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RaidProgressRepository for MySqlRaidProgressRepository {
    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<RaidProgress>> {
        let results = sqlx::query_as::<_, RaidProgressModel>(
            r"
            SELECT id, guild_id, raid_name, raid_slug, difficulty, bosses, bosses_defeated,
                   world_rank, region_rank, realm_rank, last_updated
            FROM raid_progress
            WHERE guild_id = ?
            ORDER BY last_updated DESC, raid_slug, difficulty
            ",
        )
        .bind(guild_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(RaidProgress::try_from).collect()
    }

    #[instrument(skip(self, progress), fields(raid = %progress.raid_slug, difficulty = %progress.difficulty))]
    async fn upsert(&self, progress: &RaidProgress) -> RepoResult<i64> {
        let row = RaidProgressUpsert::new(progress)?;

        let result = sqlx::query(
            r"
            INSERT INTO raid_progress (
                guild_id, raid_name, raid_slug, difficulty, bosses, bosses_defeated,
                world_rank, region_rank, realm_rank, last_updated
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = LAST_INSERT_ID(id),
                raid_name = VALUES(raid_name),
                bosses = VALUES(bosses),
                bosses_defeated = VALUES(bosses_defeated),
                world_rank = VALUES(world_rank),
                region_rank = VALUES(region_rank),
                realm_rank = VALUES(realm_rank),
                last_updated = VALUES(last_updated)
            ",
        )
        .bind(row.guild_id)
        .bind(row.raid_name)
        .bind(row.raid_slug)
        .bind(row.difficulty)
        .bind(row.bosses)
        .bind(row.bosses_defeated)
        .bind(row.world_rank)
        .bind(row.region_rank)
        .bind(row.realm_rank)
        .bind(row.last_updated)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_id() as i64)
    }
}
