//! Guild entity <-> model mapper

use guild_core::entities::Guild;
use guild_core::error::DomainError;
use guild_core::Faction;

use crate::models::GuildModel;

impl TryFrom<GuildModel> for Guild {
    type Error = DomainError;

    fn try_from(model: GuildModel) -> Result<Self, Self::Error> {
        Ok(Guild {
            id: model.id,
            name: model.name,
            realm: model.realm,
            region: model.region.parse()?,
            faction: model.faction.as_deref().map(str::parse::<Faction>).transpose()?,
            description: model.description,
            member_count: model.member_count,
            emblem_url: model.emblem_url,
            last_updated: model.last_updated,
        })
    }
}

/// Guild values bound by an upsert
pub struct GuildUpsert<'a> {
    pub name: &'a str,
    pub realm: &'a str,
    pub region: &'static str,
    pub faction: Option<&'static str>,
    pub description: Option<&'a str>,
    pub member_count: i32,
    pub emblem_url: Option<&'a str>,
}

impl<'a> GuildUpsert<'a> {
    pub fn new(guild: &'a Guild) -> Self {
        Self {
            name: &guild.name,
            realm: &guild.realm,
            region: guild.region.as_str(),
            faction: guild.faction.as_ref().map(|f| f.as_str()),
            description: guild.description.as_deref(),
            member_count: guild.member_count,
            emblem_url: guild.emblem_url.as_deref(),
        }
    }
}
