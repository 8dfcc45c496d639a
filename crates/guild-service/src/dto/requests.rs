//! Request DTOs for API endpoints
//!
//! Query strings deserialize into these and are checked with `Validate`.
//! Missing or blank guild fields fall back to the configured default guild.

use guild_common::GuildDefaults;
use guild_core::{Difficulty, DomainError, GuildKey, Region};
use serde::Deserialize;
use validator::Validate;

/// Guild selector shared by the guild, roster and progress endpoints
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GuildQuery {
    #[validate(length(max = 64, message = "Guild name must be at most 64 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 64, message = "Realm must be at most 64 characters"))]
    pub realm: Option<String>,

    pub region: Option<String>,
}

impl GuildQuery {
    /// Resolve to a guild key, filling gaps from `defaults`
    ///
    /// # Errors
    /// Returns `DomainError::InvalidValue` for an unknown region code
    pub fn resolve(&self, defaults: &GuildDefaults) -> Result<GuildKey, DomainError> {
        resolve_key(
            self.name.as_deref(),
            self.realm.as_deref(),
            self.region.as_deref(),
            defaults,
        )
    }
}

/// Query of `GET /api/raid-bosses`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RaidBossesQuery {
    /// Raid display name or slug
    #[validate(length(min = 1, max = 128, message = "Raid name is required"))]
    pub raid: String,

    #[validate(length(max = 64, message = "Guild name must be at most 64 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 64, message = "Realm must be at most 64 characters"))]
    pub realm: Option<String>,

    pub region: Option<String>,

    pub difficulty: Option<String>,
}

impl RaidBossesQuery {
    pub fn guild(&self, defaults: &GuildDefaults) -> Result<GuildKey, DomainError> {
        resolve_key(
            self.name.as_deref(),
            self.realm.as_deref(),
            self.region.as_deref(),
            defaults,
        )
    }

    /// Requested difficulty, mythic when absent
    pub fn difficulty(&self) -> Result<Difficulty, DomainError> {
        match non_blank(self.difficulty.as_deref()) {
            Some(value) => Ok(value.parse()?),
            None => Ok(Difficulty::default()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn resolve_key(
    name: Option<&str>,
    realm: Option<&str>,
    region: Option<&str>,
    defaults: &GuildDefaults,
) -> Result<GuildKey, DomainError> {
    let region = match non_blank(region) {
        Some(code) => code.parse::<Region>()?,
        None => defaults.region,
    };

    Ok(GuildKey::new(
        non_blank(name).unwrap_or(&defaults.name),
        non_blank(realm).unwrap_or(&defaults.realm),
        region,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss_query(raid: &str) -> RaidBossesQuery {
        RaidBossesQuery {
            raid: raid.to_string(),
            name: None,
            realm: None,
            region: None,
            difficulty: None,
        }
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let key = GuildQuery::default().resolve(&GuildDefaults::default()).unwrap();
        assert_eq!(key, GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu));
    }

    #[test]
    fn test_blank_fields_use_defaults() {
        let query = GuildQuery {
            name: Some("  ".to_string()),
            realm: Some("Draenor".to_string()),
            region: Some(String::new()),
        };
        let key = query.resolve(&GuildDefaults::default()).unwrap();
        assert_eq!(key.name, "Guttakrutt");
        assert_eq!(key.realm, "Draenor");
        assert_eq!(key.region, Region::Eu);
    }

    #[test]
    fn test_invalid_region_rejected() {
        let query = GuildQuery {
            region: Some("mars".to_string()),
            ..Default::default()
        };
        let err = query.resolve(&GuildDefaults::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_name_length_validated() {
        let query = GuildQuery {
            name: Some("x".repeat(65)),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_raid_required() {
        assert!(boss_query("").validate().is_err());
        assert!(boss_query("Nerub-ar Palace").validate().is_ok());
    }

    #[test]
    fn test_difficulty_defaults_to_mythic() {
        let mut query = boss_query("Nerub-ar Palace");
        assert_eq!(query.difficulty().unwrap(), Difficulty::Mythic);

        query.difficulty = Some("heroic".to_string());
        assert_eq!(query.difficulty().unwrap(), Difficulty::Heroic);

        query.difficulty = Some("lfr".to_string());
        assert!(query.difficulty().is_err());
    }
}
