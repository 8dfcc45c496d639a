//! Character entity <-> model mapper

use guild_core::entities::Character;

use crate::models::CharacterModel;

impl From<CharacterModel> for Character {
    fn from(model: CharacterModel) -> Self {
        Character {
            id: model.id,
            blizzard_id: model.blizzard_id,
            guild_id: model.guild_id,
            name: model.name,
            realm: model.realm,
            class_name: model.class_name,
            spec_name: model.spec_name,
            rank: model.guild_rank,
            level: model.level,
            item_level: model.item_level,
            mythic_score: model.mythic_score,
            avatar_url: model.avatar_url,
            last_updated: model.last_updated,
        }
    }
}

/// Character values bound by an upsert
pub struct CharacterUpsert<'a> {
    pub blizzard_id: Option<i64>,
    pub guild_id: i64,
    pub name: &'a str,
    pub realm: &'a str,
    pub class_name: &'a str,
    pub spec_name: Option<&'a str>,
    pub guild_rank: i32,
    pub level: Option<i32>,
    pub item_level: Option<f64>,
    pub mythic_score: Option<f64>,
    pub avatar_url: Option<&'a str>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl<'a> CharacterUpsert<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self {
            blizzard_id: character.blizzard_id,
            guild_id: character.guild_id,
            name: &character.name,
            realm: &character.realm,
            class_name: &character.class_name,
            spec_name: character.spec_name.as_deref(),
            guild_rank: character.rank,
            level: character.level,
            item_level: character.item_level,
            mythic_score: character.mythic_score,
            avatar_url: character.avatar_url.as_deref(),
            last_updated: character.last_updated,
        }
    }
}
