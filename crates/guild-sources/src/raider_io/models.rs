//! Raider.io response documents
//!
//! Only the fields the site uses are modelled; unknown fields are ignored.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use guild_core::Difficulty;
use serde::Deserialize;

/// `raiding/static-data` response
#[derive(Debug, Clone, Deserialize)]
pub struct RaidStaticData {
    #[serde(default)]
    pub raids: Vec<StaticRaid>,
}

impl RaidStaticData {
    pub fn raid(&self, slug: &str) -> Option<&StaticRaid> {
        self.raids.iter().find(|raid| raid.slug == slug)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticRaid {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Encounters in raid order
    #[serde(default)]
    pub encounters: Vec<StaticEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticEncounter {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

/// `guilds/profile` response
#[derive(Debug, Clone, Deserialize)]
pub struct GuildProfile {
    pub name: String,
    #[serde(default)]
    pub faction: Option<String>,
    pub realm: String,
    #[serde(default)]
    pub members: Vec<GuildMember>,
    /// Keyed by raid slug
    #[serde(default)]
    pub raid_progression: HashMap<String, RaidProgression>,
    /// Keyed by raid slug
    #[serde(default)]
    pub raid_rankings: HashMap<String, RaidRankings>,
    #[serde(default)]
    pub raid_encounters: Vec<EncounterKill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuildMember {
    pub rank: i32,
    pub character: MemberCharacter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberCharacter {
    pub name: String,
    pub realm: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub active_spec_name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaidProgression {
    pub total_bosses: i32,
    #[serde(default)]
    pub normal_bosses_killed: i32,
    #[serde(default)]
    pub heroic_bosses_killed: i32,
    #[serde(default)]
    pub mythic_bosses_killed: i32,
}

impl RaidProgression {
    pub fn killed(&self, difficulty: Difficulty) -> i32 {
        match difficulty {
            Difficulty::Normal => self.normal_bosses_killed,
            Difficulty::Heroic => self.heroic_bosses_killed,
            Difficulty::Mythic => self.mythic_bosses_killed,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaidRankings {
    #[serde(default)]
    pub normal: Option<Ranking>,
    #[serde(default)]
    pub heroic: Option<Ranking>,
    #[serde(default)]
    pub mythic: Option<Ranking>,
}

impl RaidRankings {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> Option<Ranking> {
        match difficulty {
            Difficulty::Normal => self.normal,
            Difficulty::Heroic => self.heroic,
            Difficulty::Mythic => self.mythic,
        }
    }
}

/// Rank triple; Raider.io reports 0 for "not ranked"
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Ranking {
    #[serde(default)]
    pub world: i32,
    #[serde(default)]
    pub region: i32,
    #[serde(default)]
    pub realm: i32,
}

/// One encounter of a `raid_encounters:<raid>:<difficulty>` field
#[derive(Debug, Clone, Deserialize)]
pub struct EncounterKill {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "defeatedAt", alias = "defeated_at", default)]
    pub defeated_at: Option<DateTime<Utc>>,
}

/// Treat Raider.io's 0 as absent
pub fn non_zero(rank: i32) -> Option<i32> {
    (rank > 0).then_some(rank)
}
