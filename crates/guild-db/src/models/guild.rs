//! Guild database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the guilds table
#[derive(Debug, Clone, FromRow)]
pub struct GuildModel {
    pub id: i64,
    pub name: String,
    pub realm: String,
    pub region: String,
    pub faction: Option<String>,
    pub description: Option<String>,
    pub member_count: i32,
    pub emblem_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}
