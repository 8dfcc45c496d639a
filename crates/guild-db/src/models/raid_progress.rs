//! Raid progress database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the raid_progress table
#[derive(Debug, Clone, FromRow)]
pub struct RaidProgressModel {
    pub id: i64,
    pub guild_id: i64,
    pub raid_name: String,
    pub raid_slug: String,
    pub difficulty: String,
    pub bosses: i32,
    pub bosses_defeated: i32,
    pub world_rank: Option<i32>,
    pub region_rank: Option<i32>,
    pub realm_rank: Option<i32>,
    pub last_updated: DateTime<Utc>,
}
