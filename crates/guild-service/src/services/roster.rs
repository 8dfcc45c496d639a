//! Roster service

use guild_core::GuildKey;
use tracing::{debug, instrument};

use crate::dto::{CharacterResponse, RosterResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::guild::GuildService;

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a guild's roster ordered by rank, then name
    #[instrument(skip(self))]
    pub async fn get_roster(&self, key: &GuildKey) -> ServiceResult<RosterResponse> {
        let guild = GuildService::new(self.ctx).get_guild_entity(key).await?;

        let mut characters = self.ctx.character_repo().find_by_guild(guild.id).await?;
        characters.sort_by(|a, b| {
            a.rank
                .cmp(&b.rank)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        debug!(guild_id = guild.id, count = characters.len(), "Roster loaded");

        Ok(RosterResponse::new(
            characters.iter().map(CharacterResponse::from).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ApiStatus;
    use crate::testing::{default_key, MemoryStore};
    use guild_core::entities::Character;

    #[tokio::test]
    async fn test_roster_sorted_by_rank_then_name() {
        let store = MemoryStore::new();
        let guild_id = store.seed_guild(default_key());
        for (name, rank) in [("Zed", 3), ("adam", 3), ("Krutt", 0), ("Leafy", 5)] {
            store.seed_character(Character::new(guild_id, name, "Tarren Mill", "Druid", rank));
        }
        let ctx = store.context();

        let roster = RosterService::new(&ctx).get_roster(&default_key()).await.unwrap();
        let names: Vec<_> = roster.characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Krutt", "adam", "Zed", "Leafy"]);
        assert_eq!(roster.api_status, ApiStatus::Success);
        assert!(roster.last_updated.is_some());
        assert_eq!(roster.characters[0].rank_name, "Guild Master");
    }

    #[tokio::test]
    async fn test_empty_roster() {
        let store = MemoryStore::new();
        store.seed_guild(default_key());
        let ctx = store.context();

        let roster = RosterService::new(&ctx).get_roster(&default_key()).await.unwrap();
        assert_eq!(roster.api_status, ApiStatus::Empty);
        assert!(roster.last_updated.is_none());
    }
}
