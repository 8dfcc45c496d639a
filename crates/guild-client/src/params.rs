//! Query parameters
//!
//! Pairs are written in the fixed order raid, name, realm, region,
//! difficulty and form-urlencoded (spaces become `+`).

use guild_core::{Difficulty, Region};

const DEFAULT_NAME: &str = "Guttakrutt";
const DEFAULT_REALM: &str = "Tarren Mill";

/// Guild selector for every endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildParams {
    pub name: String,
    pub realm: String,
    pub region: Region,
}

impl Default for GuildParams {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            realm: DEFAULT_REALM.to_string(),
            region: Region::Eu,
        }
    }
}

impl GuildParams {
    pub fn new(name: impl Into<String>, realm: impl Into<String>, region: Region) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            region,
        }
    }

    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("realm", self.realm.clone()),
            ("region", self.region.as_str().to_string()),
        ]
    }
}

/// Parameters of `GET /api/raid-bosses`; the raid is required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidBossesParams {
    pub raid: String,
    pub guild: GuildParams,
    pub difficulty: Difficulty,
}

impl RaidBossesParams {
    /// Default guild, mythic difficulty
    pub fn new(raid: impl Into<String>) -> Self {
        Self {
            raid: raid.into(),
            guild: GuildParams::default(),
            difficulty: Difficulty::Mythic,
        }
    }

    pub fn guild(mut self, guild: GuildParams) -> Self {
        self.guild = guild;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("raid", self.raid.clone())];
        pairs.extend(self.guild.pairs());
        pairs.push(("difficulty", self.difficulty.as_str().to_string()));
        pairs
    }
}
