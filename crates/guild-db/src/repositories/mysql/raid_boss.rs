//! MySQL implementation of RaidBossRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use guild_core::entities::RaidBoss;
use guild_core::traits::{RaidBossRepository, RepoResult};
use guild_core::value_objects::Difficulty;

use crate::mappers::RaidBossUpsert;
use crate::models::RaidBossModel;

use super::super::error::map_db_error;

/// MySQL implementation of RaidBossRepository
#[derive(Clone)]
pub struct MySqlRaidBossRepository {
    pool: MySqlPool,
}

impl MySqlRaidBossRepository {
    /// Create a new MySqlRaidBossRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RaidBossRepository for MySqlRaidBossRepository {
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
            WHERE guild_id = ?
              AND (LOWER(raid_name) = LOWER(?) OR raid_slug = LOWER(?))
              AND difficulty = ?
            ORDER BY position, name
            ",
        )
        .bind(guild_id)
        .bind(raid)
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

        let result = sqlx::query(
            r"
            INSERT INTO raid_bosses (
                guild_id, raid_name, raid_slug, slug, name, difficulty, position,
                defeated, in_progress, dps_ranking, healing_ranking, tank_ranking,
                fastest_kill_ms, kill_count, pull_count, first_kill_at, payloads, last_updated
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = LAST_INSERT_ID(id),
                raid_name = VALUES(raid_name),
                name = VALUES(name),
                position = VALUES(position),
                defeated = VALUES(defeated),
                in_progress = VALUES(in_progress),
                dps_ranking = COALESCE(VALUES(dps_ranking), dps_ranking),
                healing_ranking = COALESCE(VALUES(healing_ranking), healing_ranking),
                tank_ranking = COALESCE(VALUES(tank_ranking), tank_ranking),
                fastest_kill_ms = COALESCE(VALUES(fastest_kill_ms), fastest_kill_ms),
                kill_count = COALESCE(VALUES(kill_count), kill_count),
                pull_count = COALESCE(VALUES(pull_count), pull_count),
                first_kill_at = COALESCE(first_kill_at, VALUES(first_kill_at)),
                payloads = VALUES(payloads),
                last_updated = VALUES(last_updated)
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
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_id() as i64)
    }
}
