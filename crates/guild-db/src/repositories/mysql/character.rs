//! MySQL implementation of CharacterRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
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

/// MySQL implementation of CharacterRepository
#[derive(Clone)]
pub struct MySqlCharacterRepository {
    pool: MySqlPool,
}

impl MySqlCharacterRepository {
    /// Create a new MySqlCharacterRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count > 0)
    }
}

#[async_trait]
impl CharacterRepository for MySqlCharacterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Character>> {
        let result = sqlx::query_as::<_, CharacterModel>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<Character>> {
        let results = sqlx::query_as::<_, CharacterModel>(&format!(
            "{SELECT_COLUMNS} WHERE guild_id = ? ORDER BY guild_rank, name"
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

        let result = sqlx::query(
            r"
            INSERT INTO characters (
                blizzard_id, guild_id, name, realm, class_name, spec_name, guild_rank,
                level, item_level, mythic_score, avatar_url, last_updated
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = LAST_INSERT_ID(id),
                blizzard_id = COALESCE(VALUES(blizzard_id), blizzard_id),
                class_name = VALUES(class_name),
                spec_name = COALESCE(VALUES(spec_name), spec_name),
                guild_rank = VALUES(guild_rank),
                level = COALESCE(VALUES(level), level),
                item_level = COALESCE(VALUES(item_level), item_level),
                mythic_score = COALESCE(VALUES(mythic_score), mythic_score),
                avatar_url = COALESCE(VALUES(avatar_url), avatar_url),
                last_updated = VALUES(last_updated)
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
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.last_insert_id() as i64)
    }

    #[instrument(skip(self))]
    async fn update_mythic_score(&self, id: i64, score: Option<f64>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE characters
            SET mythic_score = ?, last_updated = UTC_TIMESTAMP(6)
            WHERE id = ?
            ",
        )
        .bind(score)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        // MySQL reports changed rows, not matched rows, so zero can mean "same value".
        if result.rows_affected() == 0 && !self.exists(id).await? {
            return Err(character_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
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
        let result = sqlx::query("DELETE FROM characters WHERE guild_id = ? AND last_updated < ?")
            .bind(guild_id)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
