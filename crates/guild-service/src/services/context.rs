//! Service context - dependency container for services
//!
//! Holds the repositories, the optional database handle, the optional
//! snapshot source and the configured default guild.

use std::sync::Arc;

use guild_common::GuildDefaults;
use guild_core::traits::{
    CharacterRepository, GuildRepository, RaidBossRepository, RaidProgressRepository,
};
use guild_core::GuildKey;
use guild_db::Database;
use guild_sources::GuildSnapshotSource;
use tokio::sync::Mutex;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Passed by reference to every service. It provides access to:
/// - Repositories (backend-agnostic trait objects)
/// - The database handle, when one is connected, for health checks
/// - The snapshot source used by the sync service, when configured
/// - The default guild used when a request leaves fields out
#[derive(Clone)]
pub struct ServiceContext {
    database: Option<Database>,

    // Repositories
    guild_repo: Arc<dyn GuildRepository>,
    character_repo: Arc<dyn CharacterRepository>,
    raid_progress_repo: Arc<dyn RaidProgressRepository>,
    raid_boss_repo: Arc<dyn RaidBossRepository>,

    snapshot_source: Option<Arc<dyn GuildSnapshotSource>>,
    sync_lock: Arc<Mutex<()>>,
    defaults: GuildDefaults,
}

impl ServiceContext {
    // === Database ===

    /// Get the database handle, if the context was built from one
    pub fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }

    // === Repositories ===

    /// Get the guild repository
    pub fn guild_repo(&self) -> &dyn GuildRepository {
        self.guild_repo.as_ref()
    }

    /// Get the character repository
    pub fn character_repo(&self) -> &dyn CharacterRepository {
        self.character_repo.as_ref()
    }

    /// Get the raid progress repository
    pub fn raid_progress_repo(&self) -> &dyn RaidProgressRepository {
        self.raid_progress_repo.as_ref()
    }

    /// Get the raid boss repository
    pub fn raid_boss_repo(&self) -> &dyn RaidBossRepository {
        self.raid_boss_repo.as_ref()
    }

    // === Sync ===

    /// Get the snapshot source, if sync is configured
    pub fn snapshot_source(&self) -> Option<&dyn GuildSnapshotSource> {
        self.snapshot_source.as_deref()
    }

    /// Lock serialising sync runs
    pub(crate) fn sync_lock(&self) -> &Mutex<()> {
        &self.sync_lock
    }

    // === Defaults ===

    /// Get the configured default guild
    pub fn defaults(&self) -> &GuildDefaults {
        &self.defaults
    }

    /// Key of the configured default guild
    pub fn default_key(&self) -> GuildKey {
        self.defaults.key()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("database", &self.database.as_ref().map(Database::backend))
            .field("repositories", &"...")
            .field("snapshot_source", &self.snapshot_source.is_some())
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    database: Option<Database>,
    guild_repo: Option<Arc<dyn GuildRepository>>,
    character_repo: Option<Arc<dyn CharacterRepository>>,
    raid_progress_repo: Option<Arc<dyn RaidProgressRepository>>,
    raid_boss_repo: Option<Arc<dyn RaidBossRepository>>,
    snapshot_source: Option<Arc<dyn GuildSnapshotSource>>,
    defaults: Option<GuildDefaults>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a connected database for health checks and every repository
    pub fn database(mut self, database: Database) -> Self {
        let repos = database.repositories();
        self.guild_repo = Some(repos.guilds);
        self.character_repo = Some(repos.characters);
        self.raid_progress_repo = Some(repos.raid_progress);
        self.raid_boss_repo = Some(repos.raid_bosses);
        self.database = Some(database);
        self
    }

    pub fn guild_repo(mut self, repo: Arc<dyn GuildRepository>) -> Self {
        self.guild_repo = Some(repo);
        self
    }

    pub fn character_repo(mut self, repo: Arc<dyn CharacterRepository>) -> Self {
        self.character_repo = Some(repo);
        self
    }

    pub fn raid_progress_repo(mut self, repo: Arc<dyn RaidProgressRepository>) -> Self {
        self.raid_progress_repo = Some(repo);
        self
    }

    pub fn raid_boss_repo(mut self, repo: Arc<dyn RaidBossRepository>) -> Self {
        self.raid_boss_repo = Some(repo);
        self
    }

    pub fn snapshot_source(mut self, source: Arc<dyn GuildSnapshotSource>) -> Self {
        self.snapshot_source = Some(source);
        self
    }

    pub fn defaults(mut self, defaults: GuildDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            database: self.database,
            guild_repo: self
                .guild_repo
                .ok_or_else(|| ServiceError::validation("guild_repo is required"))?,
            character_repo: self
                .character_repo
                .ok_or_else(|| ServiceError::validation("character_repo is required"))?,
            raid_progress_repo: self
                .raid_progress_repo
                .ok_or_else(|| ServiceError::validation("raid_progress_repo is required"))?,
            raid_boss_repo: self
                .raid_boss_repo
                .ok_or_else(|| ServiceError::validation("raid_boss_repo is required"))?,
            snapshot_source: self.snapshot_source,
            sync_lock: Arc::new(Mutex::new(())),
            defaults: self.defaults.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    #[test]
    fn test_build_requires_repositories() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: guild_repo is required");
    }

    #[test]
    fn test_build_with_memory_store() {
        let ctx = MemoryStore::new().context();
        assert!(ctx.database().is_none());
        assert!(ctx.snapshot_source().is_none());
        assert_eq!(ctx.default_key().name, "Guttakrutt");
    }
}
