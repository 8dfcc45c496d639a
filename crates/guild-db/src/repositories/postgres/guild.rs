//! PostgreSQL implementation of GuildRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::entities::Guild;
use guild_core::traits::{GuildRepository, RepoResult};
use guild_core::value_objects::GuildKey;

use crate::mappers::GuildUpsert;
use crate::models::GuildModel;

use super::super::error::map_db_error;

/// PostgreSQL implementation of GuildRepository
#[derive(Clone)]
pub struct PgGuildRepository {
    pool: PgPool,
}

impl PgGuildRepository {
    /// Create a new PgGuildRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildRepository for PgGuildRepository {
    #[instrument(skip(self), fields(guild = %key))]
    async fn find_by_key(&self, key: &GuildKey) -> RepoResult<Option<Guild>> {
        let result = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT id, name, realm, region, faction, description, member_count, emblem_url, last_updated
            FROM guilds
            WHERE LOWER(name) = LOWER($1) AND LOWER(realm) = LOWER($2) AND region = $3
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

        sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO guilds (name, realm, region, faction, description, member_count, emblem_url, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (name, realm, region) DO UPDATE
            SET faction = COALESCE(EXCLUDED.faction, guilds.faction),
                description = COALESCE(EXCLUDED.description, guilds.description),
                member_count = EXCLUDED.member_count,
                emblem_url = COALESCE(EXCLUDED.emblem_url, guilds.emblem_url),
                last_updated = NOW()
            RETURNING id
            ",
        )
        .bind(row.name)
        .bind(row.realm)
        .bind(row.region)
        .bind(row.faction)
        .bind(row.description)
        .bind(row.member_count)
        .bind(row.emblem_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
