//! Test fixtures and data generators
//!
//! Each fixture guild gets a unique name so tests can share one database.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::Utc;
use guild_core::entities::{Character, Guild, RaidBoss, RaidProgress};
use guild_core::{Difficulty, Faction, GuildKey, Region};
use guild_service::ServiceContext;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

pub const RAID_NAME: &str = "Liberation of Undermine";
pub const RAID_SLUG: &str = "liberation-of-undermine";

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!(
        "{}-{}",
        Utc::now().timestamp_micros(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// A guild key nobody else in this run uses
pub fn unique_guild_key() -> GuildKey {
    GuildKey::new(format!("Fixture {}", unique_suffix()), "Tarren Mill", Region::Eu)
}

/// What [`seed_guild`] wrote
#[derive(Debug, Clone)]
pub struct SeededGuild {
    pub key: GuildKey,
    pub guild_id: i64,
}

impl SeededGuild {
    /// `name=..&realm=..&region=..` for this guild, percent-encoded
    pub fn query(&self) -> String {
        format!(
            "name={}&realm={}&region={}",
            encode(&self.key.name),
            encode(&self.key.realm),
            self.key.region
        )
    }
}

/// Guild with two members, 1/8 mythic progress and three encounters
pub async fn seed_guild(ctx: &ServiceContext) -> Result<SeededGuild> {
    let key = unique_guild_key();

    let mut guild = Guild::new(key.clone());
    guild.faction = Some(Faction::Horde);
    guild.member_count = 2;
    let guild_id = ctx.guild_repo().upsert(&guild).await?;

    let mut krutt = Character::new(guild_id, "Krutt", "Tarren Mill", "Death Knight", 0);
    krutt.mythic_score = Some(2891.37);
    krutt.item_level = Some(639.4);
    ctx.character_repo().upsert(&krutt).await?;
    ctx.character_repo()
        .upsert(&Character::new(guild_id, "Bladewind", "Tarren Mill", "Warrior", 3))
        .await?;

    let progress = RaidProgress::new(guild_id, RAID_NAME, RAID_SLUG, Difficulty::Mythic, 8, 1)?;
    ctx.raid_progress_repo().upsert(&progress).await?;

    let encounters = [
        ("vexie", "Vexie and the Geargrinders"),
        ("cauldron-of-carnage", "Cauldron of Carnage"),
        ("rik-reverb", "Rik Reverb"),
    ];
    for (position, (slug, name)) in (1..).zip(encounters) {
        let mut boss = RaidBoss::new(
            guild_id,
            RAID_NAME,
            RAID_SLUG,
            slug,
            name,
            Difficulty::Mythic,
            position,
        );
        boss.defeated = position == 1;
        boss.in_progress = position == 2;
        ctx.raid_boss_repo().upsert(&boss).await?;
    }

    Ok(SeededGuild { key, guild_id })
}

fn encode(value: &str) -> String {
    value.replace('%', "%25").replace(' ', "%20").replace('&', "%26")
}
