//! # guild-service
//!
//! Application layer: read services behind the REST endpoints, the sync
//! service that persists external snapshots, the refresh scheduler, and the
//! DTOs shared with the API and web crates.

pub mod dto;
pub mod services;

pub use services::{
    GuildService, HealthService, RaidService, RefreshScheduler, RosterService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SyncReport, SyncService,
};

#[cfg(test)]
pub(crate) mod testing;
