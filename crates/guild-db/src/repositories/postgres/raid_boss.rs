//! PostgreSQL implementation of RaidBossRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::entities::RaidBoss;
use guild_core::traits::{RaidBossRepository, RepoResult};
use guild_core::value_objects::Difficulty;

use crate::mappers::RaidBossUpsert;
use crate::models::RaidBossModel;

use super::super::error::map_db_error;

/// PostgreSQL implementation of RaidBossRepository
#[derive(Clone)]
pub struct PgRaidBossRepository {
    pool: PgPool,
}

impl PgRaidBossRepository {
    /// Create a new PgRaidBossRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RaidBossRepository for PgRaidBossRepository {
    #[instrument(skip(self))]
    async fn find_by_raid(
        &self,
        guild_id: i64,
        raid: &str,
        difficulty: Difficulty,
    ) -> RepoResult<Vec<RaidBoss>> {
        let results = sqlx::query_as::<_, RaidBossModel>(
            r"
            SELECT id, guild_id, raid_name, raid_slug, slug, name, difficulty, position,
                   defeated, in_progress, dps_ranking, healing_ranking, tank_ranking,
                   fastest_kill_ms, kill_count, pull_count, first_kill_at, payloads, last_updated
            FROM raid_bosses
            WHERE guild_id = $1
              AND (LOWER(raid_name) = LOWER($2) OR raid_slug = LOWER($2))
              AND difficulty = $3
            ORDER BY position, name
            ",
        )
        .bind(guild_id)
        .bind(raid)
        .bind(difficulty.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(RaidBoss::try_from).collect()
    }

    #[instrument(skip(self, boss), fields(raid = %boss.raid_slug, boss = %boss.slug))]
    async fn upsert(&self, boss: &RaidBoss) -> RepoResult<i64> {
        let row = RaidBossUpsert::new(boss);

        sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO raid_bosses (
                guild_id, raid_name, raid_slug, slug, name, difficulty, position,
                defeated, in_progress, dps_ranking, healing_ranking, tank_ranking,
                fastest_kill_ms, kill_count, pull_count, first_kill_at, payloads, last_updated
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            ON CONFLICT (guild_id, raid_slug, slug, difficulty) DO UPDATE
            SET raid_name = EXCLUDED.raid_name,
                name = EXCLUDED.name,
                position = EXCLUDED.position,
                defeated = EXCLUDED.defeated,
                in_progress = EXCLUDED.in_progress,
                dps_ranking = COALESCE(EXCLUDED.dps_ranking, raid_bosses.dps_ranking),
                healing_ranking = COALESCE(EXCLUDED.healing_ranking, raid_bosses.healing_ranking),
                tank_ranking = COALESCE(EXCLUDED.tank_ranking, raid_bosses.tank_ranking),
                fastest_kill_ms = COALESCE(EXCLUDED.fastest_kill_ms, raid_bosses.fastest_kill_ms),
                kill_count = COALESCE(EXCLUDED.kill_count, raid_bosses.kill_count),
                pull_count = COALESCE(EXCLUDED.pull_count, raid_bosses.pull_count),
                first_kill_at = COALESCE(raid_bosses.first_kill_at, EXCLUDED.first_kill_at),
                payloads = EXCLUDED.payloads,
                last_updated = EXCLUDED.last_updated
            RETURNING id
            ",
        )
        .bind(row.guild_id)
        .bind(row.raid_name)
        .bind(row.raid_slug)
        .bind(row.slug)
        .bind(row.name)
        .bind(row.difficulty)
        .bind(row.position)
        .bind(row.defeated)
        .bind(row.in_progress)
        .bind(row.dps_ranking)
        .bind(row.healing_ranking)
        .bind(row.tank_ranking)
        .bind(row.fastest_kill_ms)
        .bind(row.kill_count)
        .bind(row.pull_count)
        .bind(row.first_kill_at)
        .bind(row.payloads)
        .bind(row.last_updated)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
