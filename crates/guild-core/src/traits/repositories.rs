//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; `guild-db` provides one
//! implementation per supported database backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Character, Guild, RaidBoss, RaidProgress};
use crate::error::DomainError;
use crate::value_objects::{Difficulty, GuildKey};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guild Repository
// ============================================================================

#[async_trait]
pub trait GuildRepository: Send + Sync {
    /// Find a guild by name, realm and region (case-insensitive on name and realm)
    async fn find_by_key(&self, key: &GuildKey) -> RepoResult<Option<Guild>>;

    /// Insert or refresh a guild keyed by name, realm and region; returns its id
    async fn upsert(&self, guild: &Guild) -> RepoResult<i64>;
}

// ============================================================================
// Character Repository
// ============================================================================

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find a character by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Character>>;

    /// List a guild's roster
    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<Character>>;

    /// Insert or refresh a character keyed by guild, name and realm; returns its id
    async fn upsert(&self, character: &Character) -> RepoResult<i64>;

    /// Update the stored Mythic+ score
    async fn update_mythic_score(&self, id: i64, score: Option<f64>) -> RepoResult<()>;

    /// Delete a character
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Delete roster entries of a guild not refreshed since `cutoff`; returns the count
    async fn delete_stale(&self, guild_id: i64, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

// ============================================================================
// Raid Progress Repository
// ============================================================================

#[async_trait]
pub trait RaidProgressRepository: Send + Sync {
    /// List all progress rows of a guild
    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<RaidProgress>>;

    /// Insert or refresh progress keyed by guild, raid slug and difficulty
    async fn upsert(&self, progress: &RaidProgress) -> RepoResult<i64>;
}

// ============================================================================
// Raid Boss Repository
// ============================================================================

#[async_trait]
pub trait RaidBossRepository: Send + Sync {
    /// List bosses of one raid (matched by name or slug) at one difficulty, in encounter order
    async fn find_by_raid(
        &self,
        guild_id: i64,
        raid: &str,
        difficulty: Difficulty,
    ) -> RepoResult<Vec<RaidBoss>>;

    /// Insert or refresh a boss keyed by guild, raid slug, boss slug and difficulty
    async fn upsert(&self, boss: &RaidBoss) -> RepoResult<i64>;
}
