//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use guild_core::entities::Character;
use guild_core::traits::{CharacterRepository, RepoResult};

use crate::mappers::CharacterUpsert;
use crate::models::CharacterModel;

use super::super::error::{character_not_found, map_db_error};

const SELECT_COLUMNS: &str = r"
    SELECT id, blizzard_id, guild_id, name, realm, class_name, spec_name, guild_rank,
           level, item_level, mythic_score, avatar_url, last_updated
    FROM characters
";

/// PostgreSQL implementation of CharacterRepository
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Create a new PgCharacterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Character>> {
        let result = sqlx::query_as::<_, CharacterModel>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<Character>> {
        let results = sqlx::query_as::<_, CharacterModel>(&format!(
            "{SELECT_COLUMNS} WHERE guild_id = $1 ORDER BY guild_rank, name"
        ))
        .bind(guild_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Character::from).collect())
    }

    #[instrument(skip(self, character), fields(name = %character.name, realm = %character.realm))]
    async fn upsert(&self, character: &Character) -> RepoResult<i64> {
        let row = CharacterUpsert::new(character);

        sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO characters (
                blizzard_id, guild_id, name, realm, class_name, spec_name, guild_rank,
                level, item_level, mythic_score, avatar_url, last_updated
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (guild_id, name, realm) DO UPDATE
            SET blizzard_id = COALESCE(EXCLUDED.blizzard_id, characters.blizzard_id),
                class_name = EXCLUDED.class_name,
                spec_name = COALESCE(EXCLUDED.spec_name, characters.spec_name),
                guild_rank = EXCLUDED.guild_rank,
                level = COALESCE(EXCLUDED.level, characters.level),
                item_level = COALESCE(EXCLUDED.item_level, characters.item_level),
                mythic_score = COALESCE(EXCLUDED.mythic_score, characters.mythic_score),
                avatar_url = COALESCE(EXCLUDED.avatar_url, characters.avatar_url),
                last_updated = EXCLUDED.last_updated
            RETURNING id
            ",
        )
        .bind(row.blizzard_id)
        .bind(row.guild_id)
        .bind(row.name)
        .bind(row.realm)
        .bind(row.class_name)
        .bind(row.spec_name)
        .bind(row.guild_rank)
        .bind(row.level)
        .bind(row.item_level)
        .bind(row.mythic_score)
        .bind(row.avatar_url)
        .bind(row.last_updated)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn update_mythic_score(&self, id: i64, score: Option<f64>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE characters
            SET mythic_score = $2, last_updated = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(score)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(character_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(character_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_stale(&self, guild_id: i64, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM characters WHERE guild_id = $1 AND last_updated < $2")
            .bind(guild_id)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
