//! Response envelopes as served by the guild API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /api/guild`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildInfo {
    pub id: i64,
    pub name: String,
    pub realm: String,
    pub server_region: String,
    pub faction: Option<String>,
    pub description: Option<String>,
    pub member_count: i32,
    pub emblem_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassColorInfo {
    pub name: String,
    pub color: String,
    pub hex: String,
    pub text_class: String,
    pub bg_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub blizzard_id: Option<i64>,
    pub guild_id: i64,
    pub name: String,
    pub realm: String,
    pub class_name: String,
    pub spec_name: Option<String>,
    pub rank: i32,
    pub rank_name: String,
    pub level: Option<i32>,
    pub item_level: Option<f64>,
    pub mythic_score: Option<f64>,
    pub avatar_url: Option<String>,
    pub class_color: ClassColorInfo,
    pub class_icon_url: String,
    pub last_updated: DateTime<Utc>,
}

/// `GET /api/roster`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEnvelope {
    pub characters: Vec<Character>,
    pub api_status: String,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidProgress {
    pub id: i64,
    pub guild_id: i64,
    pub raid_name: String,
    pub raid_slug: String,
    pub difficulty: String,
    pub bosses: i32,
    pub bosses_defeated: i32,
    pub summary: String,
    pub world_rank: Option<i32>,
    pub region_rank: Option<i32>,
    pub realm_rank: Option<i32>,
    pub last_updated: DateTime<Utc>,
}

/// `GET /api/raid-progress`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidProgressEnvelope {
    pub progresses: Vec<RaidProgress>,
    pub api_status: String,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Boss record. Source payloads stay as JSON; their shape belongs to the
/// upstream service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidBoss {
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
    pub status: String,
    pub dps_ranking: Option<i32>,
    pub healing_ranking: Option<i32>,
    pub tank_ranking: Option<i32>,
    pub fastest_kill_ms: Option<i64>,
    pub kill_count: Option<i32>,
    pub pull_count: Option<i32>,
    pub first_kill_at: Option<DateTime<Utc>>,
    pub raider_io_data: Option<serde_json::Value>,
    pub warcraft_logs_data: Option<serde_json::Value>,
    pub last_updated: DateTime<Utc>,
}

/// `GET /api/raid-bosses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidBossesEnvelope {
    pub bosses: Vec<RaidBoss>,
    pub api_status: String,
    pub last_updated: Option<DateTime<Utc>>,
}

impl RaidProgressEnvelope {
    /// Progress row for a raid slug at a difficulty code
    pub fn find(&self, raid_slug: &str, difficulty: &str) -> Option<&RaidProgress> {
        self.progresses
            .iter()
            .find(|p| p.raid_slug == raid_slug && p.difficulty == difficulty)
    }
}
