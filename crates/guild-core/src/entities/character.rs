//! Character entity - a guild roster member

use chrono::{DateTime, Utc};

use crate::value_objects::{class_color, class_icon_url, rank_name, ClassColor};

/// Character entity
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Database id, 0 until persisted
    pub id: i64,
    pub blizzard_id: Option<i64>,
    pub guild_id: i64,
    pub name: String,
    pub realm: String,
    pub class_name: String,
    pub spec_name: Option<String>,
    /// Index into the guild rank table
    pub rank: i32,
    pub level: Option<i32>,
    pub item_level: Option<f64>,
    /// Mythic+ score, stored with its decimals
    pub mythic_score: Option<f64>,
    pub avatar_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl Character {
    /// Create an unsaved character
    pub fn new(
        guild_id: i64,
        name: impl Into<String>,
        realm: impl Into<String>,
        class_name: impl Into<String>,
        rank: i32,
    ) -> Self {
        Self {
            id: 0,
            blizzard_id: None,
            guild_id,
            name: name.into(),
            realm: realm.into(),
            class_name: class_name.into(),
            spec_name: None,
            rank,
            level: None,
            item_level: None,
            mythic_score: None,
            avatar_url: None,
            last_updated: Utc::now(),
        }
    }

    #[inline]
    pub fn rank_name(&self) -> &'static str {
        rank_name(self.rank)
    }

    #[inline]
    pub fn class_color(&self) -> ClassColor {
        class_color(&self.class_name)
    }

    pub fn class_icon_url(&self) -> String {
        class_icon_url(&self.class_name)
    }
}
