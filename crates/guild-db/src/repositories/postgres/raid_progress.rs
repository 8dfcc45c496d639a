//! PostgreSQL implementation of RaidProgressRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::entities::RaidProgress;
use guild_core::traits::{RaidProgressRepository, RepoResult};

use crate::mappers::RaidProgressUpsert;
use crate::models::RaidProgressModel;

use super::super::error::map_db_error;

/// PostgreSQL implementation of RaidProgressRepository
#[derive(Clone)]
pub struct PgRaidProgressRepository {
    pool: PgPool,
}

impl PgRaidProgressRepository {
    /// Create a new PgRaidProgressRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RaidProgressRepository for PgRaidProgressRepository {
    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<RaidProgress>> {
        let results = sqlx::query_as::<_, RaidProgressModel>(
            r"
            SELECT id, guild_id, raid_name, raid_slug, difficulty, bosses, bosses_defeated,
                   world_rank, region_rank, realm_rank, last_updated
            FROM raid_progress
            WHERE guild_id = $1
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

        sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO raid_progress (
                guild_id, raid_name, raid_slug, difficulty, bosses, bosses_defeated,
                world_rank, region_rank, realm_rank, last_updated
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (guild_id, raid_slug, difficulty) DO UPDATE
            SET raid_name = EXCLUDED.raid_name,
                bosses = EXCLUDED.bosses,
                bosses_defeated = EXCLUDED.bosses_defeated,
                world_rank = EXCLUDED.world_rank,
                region_rank = EXCLUDED.region_rank,
                realm_rank = EXCLUDED.realm_rank,
                last_updated = EXCLUDED.last_updated
            RETURNING id
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
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
