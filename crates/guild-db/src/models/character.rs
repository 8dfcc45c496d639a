//! Character database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the characters table
#[derive(Debug, Clone, FromRow)]
pub struct CharacterModel {
    pub id: i64,
    pub blizzard_id: Option<i64>,
    pub guild_id: i64,
    pub name: String,
    pub realm: String,
    pub class_name: String,
    pub spec_name: Option<String>,
    /// `rank` is reserved in MySQL 8
    pub guild_rank: i32,
    pub level: Option<i32>,
    pub item_level: Option<f64>,
    pub mythic_score: Option<f64>,
    pub avatar_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}
