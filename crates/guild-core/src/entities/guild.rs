//! Guild entity - a player organization on one realm

use chrono::{DateTime, Utc};

use crate::value_objects::{Faction, GuildKey, Region};

/// Guild entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    /// Database id, 0 until persisted
    pub id: i64,
    pub name: String,
    pub realm: String,
    pub region: Region,
    pub faction: Option<Faction>,
    pub description: Option<String>,
    pub member_count: i32,
    pub emblem_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl Guild {
    /// Create an unsaved guild for the given identity
    pub fn new(key: GuildKey) -> Self {
        Self {
            id: 0,
            name: key.name,
            realm: key.realm,
            region: key.region,
            faction: None,
            description: None,
            member_count: 0,
            emblem_url: None,
            last_updated: Utc::now(),
        }
    }

    /// The natural key of this guild
    pub fn key(&self) -> GuildKey {
        GuildKey::new(self.name.clone(), self.realm.clone(), self.region)
    }

    /// Case-insensitive identity check against a key
    pub fn matches(&self, key: &GuildKey) -> bool {
        self.region == key.region
            && self.name.eq_ignore_ascii_case(&key.name)
            && self.realm.eq_ignore_ascii_case(&key.realm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_guild() {
        let guild = Guild::new(GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu));
        assert_eq!(guild.id, 0);
        assert_eq!(guild.member_count, 0);
        assert_eq!(guild.key().realm_slug(), "tarren-mill");
    }

    #[test]
    fn test_matches_ignores_case() {
        let guild = Guild::new(GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu));
        assert!(guild.matches(&GuildKey::new("guttakrutt", "tarren mill", Region::Eu)));
        assert!(!guild.matches(&GuildKey::new("Guttakrutt", "Tarren Mill", Region::Us)));
    }
}
