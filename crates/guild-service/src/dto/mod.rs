//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for query strings
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{GuildQuery, RaidBossesQuery};

pub use responses::{
    ApiStatus, CharacterResponse, GuildResponse, HealthChecks, HealthResponse,
    RaidBossResponse, RaidBossesResponse, RaidProgressListResponse, RaidProgressResponse,
    ReadinessResponse, RosterResponse, SyncReportResponse,
};
