//! Raid boss database model

use chrono::{DateTime, Utc};
use guild_core::SourcePayload;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the raid_bosses table
#[derive(Debug, Clone, FromRow)]
pub struct RaidBossModel {
    pub id: i64,
    pub guild_id: i64,
    pub raid_name: String,
    pub raid_slug: String,
    pub slug: String,
    pub name: String,
    pub difficulty: String,
    pub position: i32,
    pub defeated: bool,
    pub in_progress: bool,
    pub dps_ranking: Option<i32>,
    pub healing_ranking: Option<i32>,
    pub tank_ranking: Option<i32>,
    pub fastest_kill_ms: Option<i64>,
    pub kill_count: Option<i32>,
    pub pull_count: Option<i32>,
    pub first_kill_at: Option<DateTime<Utc>>,
    /// Per-source payloads, stored as a JSON array of tagged objects
    pub payloads: Json<Vec<SourcePayload>>,
    pub last_updated: DateTime<Utc>,
}
