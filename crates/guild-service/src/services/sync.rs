//! Sync service
//!
//! Pulls a snapshot from the configured source and upserts it. Every row
//! written in a run carries the run's start time, so characters that left
//! the guild are the ones still older than that afterwards.

use chrono::{DateTime, SubsecRound, Utc};
use guild_core::GuildKey;
use guild_sources::GuildSnapshot;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of one sync run
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub guild_id: i64,
    pub guild: GuildKey,
    pub characters: usize,
    pub removed_characters: u64,
    pub progresses: usize,
    pub bosses: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Sync service
pub struct SyncService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SyncService<'a> {
    /// Create a new SyncService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch and persist one guild. Runs are serialised; a second caller
    /// gets a conflict instead of waiting.
    #[instrument(skip(self), fields(guild = %key))]
    pub async fn sync_guild(&self, key: &GuildKey) -> ServiceResult<SyncReport> {
        let source = self
            .ctx
            .snapshot_source()
            .ok_or(ServiceError::Disabled("Guild sync"))?;

        let _guard = self
            .ctx
            .sync_lock()
            .try_lock()
            .map_err(|_| ServiceError::conflict("a guild sync is already running"))?;

        // Storage keeps microseconds; the cutoff must compare equal to what was written.
        let started_at = Utc::now().trunc_subsecs(6);
        let snapshot = source.fetch_snapshot(key).await?;
        let report = self.persist(snapshot, started_at).await?;

        info!(
            guild_id = report.guild_id,
            characters = report.characters,
            removed = report.removed_characters,
            progresses = report.progresses,
            bosses = report.bosses,
            "Guild sync finished"
        );

        Ok(report)
    }

    /// Upsert a snapshot stamped with `started_at`, then drop stale roster rows
    ///
    /// Stale rows are only dropped when the snapshot carries a complete,
    /// non-empty roster.
    #[instrument(skip_all, fields(guild = %snapshot.guild.name))]
    pub async fn persist(
        &self,
        snapshot: GuildSnapshot,
        started_at: DateTime<Utc>,
    ) -> ServiceResult<SyncReport> {
        let GuildSnapshot {
            mut guild,
            characters,
            progress,
            bosses,
            roster_complete,
        } = snapshot;

        guild.last_updated = started_at;
        let guild_id = self.ctx.guild_repo().upsert(&guild).await?;

        for mut character in characters.iter().cloned() {
            character.guild_id = guild_id;
            character.last_updated = started_at;
            self.ctx.character_repo().upsert(&character).await?;
        }

        for mut row in progress.iter().cloned() {
            row.guild_id = guild_id;
            row.last_updated = started_at;
            row.validate()?;
            self.ctx.raid_progress_repo().upsert(&row).await?;
        }

        for mut boss in bosses.iter().cloned() {
            boss.guild_id = guild_id;
            boss.last_updated = started_at;
            self.ctx.raid_boss_repo().upsert(&boss).await?;
        }

        let removed_characters = if roster_complete && !characters.is_empty() {
            self.ctx
                .character_repo()
                .delete_stale(guild_id, started_at)
                .await?
        } else {
            warn!(
                characters = characters.len(),
                "Roster incomplete, keeping characters missing from this sync"
            );
            0
        };

        Ok(SyncReport {
            guild_id,
            guild: guild.key(),
            characters: characters.len(),
            removed_characters,
            progresses: progress.len(),
            bosses: bosses.len(),
            started_at,
            finished_at: Utc::now(),
        })
    }
}
