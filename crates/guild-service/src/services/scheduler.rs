//! Periodic refresh of the default guild
//!
//! One spawned task, one sync per tick. Ticks missed while a sync runs are
//! skipped rather than replayed. A failed run is logged and the next tick
//! tries again.

use std::time::Duration;

use guild_common::SyncConfig;
use guild_core::GuildKey;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

use super::context::ServiceContext;
use super::sync::{SyncReport, SyncService};

/// Fixed-interval sync runner
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    ctx: ServiceContext,
    key: GuildKey,
    period: Duration,
}

impl RefreshScheduler {
    pub fn new(ctx: ServiceContext, key: GuildKey, period: Duration) -> Self {
        Self {
            ctx,
            key,
            period: period.max(Duration::from_secs(1)),
        }
    }

    /// Scheduler for the context's default guild; `None` when sync is disabled
    /// or there is nothing to sync from
    pub fn from_config(ctx: &ServiceContext, config: &SyncConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        if ctx.snapshot_source().is_none() {
            warn!("Sync enabled but no snapshot source configured");
            return None;
        }

        Some(Self::new(
            ctx.clone(),
            ctx.default_key(),
            Duration::from_secs(config.interval_secs),
        ))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run one sync, logging instead of returning the failure
    pub async fn run_once(&self) -> Option<SyncReport> {
        SyncService::new(&self.ctx)
            .sync_guild(&self.key)
            .await
            .inspect_err(|e| error!(error = %e, guild = %self.key, "Scheduled sync failed"))
            .ok()
    }

    /// Start ticking. The first tick fires immediately.
    pub fn spawn(self) -> JoinHandle<()> {
        info!(guild = %self.key, period_secs = self.period.as_secs(), "Refresh scheduler started");

        tokio::spawn(async move {
            let mut ticker = interval(self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                self.run_once().await;
            }
        })
    }

    /// Abort a spawned scheduler and wait until its task is gone
    pub async fn stop(handle: JoinHandle<()>) {
        handle.abort();
        match handle.await {
            Err(e) if e.is_panic() => error!(error = %e, "Refresh scheduler panicked"),
            _ => info!("Refresh scheduler stopped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{default_key, snapshot, FakeSource, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn test_disabled_by_config() {
        let store = MemoryStore::new();
        let ctx = store.context_with_source(Arc::new(FakeSource::new(snapshot())));
        assert!(RefreshScheduler::from_config(&ctx, &SyncConfig::default()).is_none());

        let enabled = SyncConfig {
            enabled: true,
            ..SyncConfig::default()
        };
        let scheduler = RefreshScheduler::from_config(&ctx, &enabled).unwrap();
        assert_eq!(scheduler.period(), Duration::from_secs(3600));
    }

    #[test]
    fn test_no_source_no_scheduler() {
        let ctx = MemoryStore::new().context();
        let enabled = SyncConfig {
            enabled: true,
            ..SyncConfig::default()
        };
        assert!(RefreshScheduler::from_config(&ctx, &enabled).is_none());
    }

    #[tokio::test]
    async fn test_failure_is_not_fatal() {
        let ctx = MemoryStore::new().context_with_source(Arc::new(FakeSource::failing()));
        let scheduler = RefreshScheduler::new(ctx, default_key(), Duration::ZERO);
        assert_eq!(scheduler.period(), Duration::from_secs(1));
        assert!(scheduler.run_once().await.is_none());
    }

    #[tokio::test]
    async fn test_spawned_task_syncs() {
        let store = MemoryStore::new();
        let source = Arc::new(FakeSource::new(snapshot()));
        let ctx = store.context_with_source(source.clone());

        let handle = RefreshScheduler::new(ctx, default_key(), Duration::from_secs(3600)).spawn();
        for _ in 0..50 {
            if !store.characters().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        handle.abort();

        assert_eq!(store.characters().len(), 2);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_stop_releases_the_task() {
        let store = MemoryStore::new();
        let source = Arc::new(FakeSource::new(snapshot()));
        let ctx = store.context_with_source(source.clone());

        let handle = RefreshScheduler::new(ctx, default_key(), Duration::from_secs(3600)).spawn();
        assert!(Arc::strong_count(&source) > 1);

        RefreshScheduler::stop(handle).await;
        assert_eq!(Arc::strong_count(&source), 1);
    }
}
