//! MySQL implementation of GuildRepository

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use guild_core::entities::Guild;
use guild_core::traits::{GuildRepository, RepoResult};
use guild_core::value_objects::GuildKey;

use crate::mappers::GuildUpsert;
use crate::models::GuildModel;

use super::super::error::map_db_error;

/// MySQL implementation of GuildRepository
#[derive(Clone)]
pub struct MySqlGuildRepository {
    pool: MySqlPool,
}

impl MySqlGuildRepository {
    /// Create a new MySqlGuildRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildRepository for MySqlGuildRepository {
    #[instrument(skip(self), fields(guild = %key))]
    async fn find_by_key(&self, key: &GuildKey) -> RepoResult<Option<Guild>> {
        let result = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT id, name, realm, region, faction, description, member_count, emblem_url, last_updated
            FROM guilds
            WHERE LOWER(name) = LOWER(?) AND LOWER(realm) = LOWER(?) AND region = ?
            ",
        )
        .bind(&key.name)
        .bind(&key.realm)
        .bind(key.region.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Guild::try_from).transpose()
    }

    #[instrument(skip(self, guild), fields(guild = %guild.key()))]
    async fn upsert(&self, guild: &Guild) -> RepoResult<i64> {
        let row = GuildUpsert::new(guild);

        let result = sqlx::query(
            r"
            INSERT INTO guilds (name, realm, region, faction, description, member_count, emblem_url, last_updated)
            VALUES (?, ?, ?, ?, ?, ?, ?, UTC_TIMESTAMP(6))
            ON DUPLICATE KEY UPDATE
                id = LAST_INSERT_ID(id),
                faction = COALESCE(VALUES(faction), faction),
                description = COALESCE(VALUES(description), description),
                member_count = VALUES(member_count),
                emblem_url = COALESCE(VALUES(emblem_url), emblem_url),
                last_updated = UTC_TIMESTAMP(6)
            ",
        )
        .bind(row.name)
        .bind(row.realm)
        .bind(row.region)
        .bind(row.faction)
        .bind(row.description)
        .bind(row.member_count)
        .bind(row.emblem_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_id() as i64)
    }
}
