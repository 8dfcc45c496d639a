//! Guild identity - name + realm + region uniquely identify a guild

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Region;

/// Natural key of a guild
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildKey {
    pub name: String,
    pub realm: String,
    pub region: Region,
}

impl GuildKey {
    pub fn new(name: impl Into<String>, realm: impl Into<String>, region: Region) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            region,
        }
    }

    /// Realm slug as used by external APIs ("Tarren Mill" -> "tarren-mill")
    pub fn realm_slug(&self) -> String {
        slugify(&self.realm)
    }

    /// Guild name slug as used by the Battle.net profile API
    pub fn name_slug(&self) -> String {
        slugify(&self.name)
    }
}

impl fmt::Display for GuildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}@{}", self.name, self.realm, self.region)
    }
}

/// Lowercase, drop apostrophes, and join words with hyphens
pub fn slugify(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| word.replace('\'', "").to_lowercase())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realm_slug() {
        let key = GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu);
        assert_eq!(key.realm_slug(), "tarren-mill");
        assert_eq!(key.name_slug(), "guttakrutt");
    }

    #[test]
    fn test_slugify_apostrophes() {
        assert_eq!(slugify("Kel'Thuzad"), "kelthuzad");
        assert_eq!(slugify("  Argent   Dawn "), "argent-dawn");
    }

    #[test]
    fn test_display() {
        let key = GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu);
        assert_eq!(key.to_string(), "Guttakrutt-Tarren Mill@eu");
    }
}
