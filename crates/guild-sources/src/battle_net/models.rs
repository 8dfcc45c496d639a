//! Battle.net profile API documents

use secrecy::SecretString;
use serde::Deserialize;

/// OAuth client-credentials token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: SecretString,
    /// Lifetime in seconds
    pub expires_in: u64,
}

/// `data/wow/guild/{realm}/{name}` response
#[derive(Debug, Clone, Deserialize)]
pub struct BnetGuild {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub faction: Option<BnetFaction>,
    #[serde(default)]
    pub member_count: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BnetFaction {
    /// "ALLIANCE" or "HORDE"
    #[serde(rename = "type")]
    pub kind: String,
}

/// `data/wow/guild/{realm}/{name}/roster` response
#[derive(Debug, Clone, Deserialize)]
pub struct BnetRoster {
    #[serde(default)]
    pub members: Vec<BnetRosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BnetRosterEntry {
    pub character: BnetCharacter,
    pub rank: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BnetCharacter {
    pub id: i64,
    pub name: String,
    pub realm: BnetRealmRef,
    #[serde(default)]
    pub level: Option<i32>,
    pub playable_class: BnetClassRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BnetRealmRef {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BnetClassRef {
    pub id: i32,
}

/// Class name for a playable class id
pub fn class_name(id: i32) -> &'static str {
    match id {
        1 => "Warrior",
        2 => "Paladin",
        3 => "Hunter",
        4 => "Rogue",
        5 => "Priest",
        6 => "Death Knight",
        7 => "Shaman",
        8 => "Mage",
        9 => "Warlock",
        10 => "Monk",
        11 => "Druid",
        12 => "Demon Hunter",
        13 => "Evoker",
        _ => "Unknown",
    }
}
