//! Snapshot assembly
//!
//! Raider.io supplies the roster, progression, rankings and encounter kills;
//! Battle.net (when configured) adds Blizzard ids, levels and any roster
//! members Raider.io does not track. All entities come out unsaved (id 0,
//! guild id 0); the sync service assigns ids while persisting.

use std::collections::HashMap;

use async_trait::async_trait;
use guild_common::{BattleNetConfig, SyncConfig};
use guild_core::entities::{Character, Guild, RaidBoss, RaidProgress, RaiderIoBossData, SourcePayload};
use guild_core::value_objects::{slugify, Difficulty, Faction, GuildKey};
use tracing::{info, instrument, warn};

use crate::battle_net::models::{class_name, BnetGuild, BnetRoster};
use crate::battle_net::BattleNetClient;
use crate::error::SourceError;
use crate::raider_io::models::{non_zero, EncounterKill, GuildProfile, RaidStaticData};
use crate::raider_io::RaiderIoClient;

/// One normalised view of a guild's external data
#[derive(Debug, Clone)]
pub struct GuildSnapshot {
    pub guild: Guild,
    pub characters: Vec<Character>,
    pub progress: Vec<RaidProgress>,
    pub bosses: Vec<RaidBoss>,
    /// False when the roster may be partial; departed members are then kept
    pub roster_complete: bool,
}

/// Source of guild snapshots
#[async_trait]
pub trait GuildSnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self, key: &GuildKey) -> Result<GuildSnapshot, SourceError>;
}

/// Encounter kill states of one raid at one difficulty
#[derive(Debug, Clone)]
pub struct EncounterSet {
    pub raid_slug: String,
    pub difficulty: Difficulty,
    pub encounters: Vec<EncounterKill>,
}

/// Everything fetched for one snapshot
#[derive(Debug, Clone)]
pub struct SnapshotInputs {
    pub static_data: RaidStaticData,
    pub profile: GuildProfile,
    pub encounters: Vec<EncounterSet>,
    pub bnet_guild: Option<BnetGuild>,
    pub bnet_roster: Option<BnetRoster>,
}

/// Merges fetched documents into domain entities
#[derive(Debug, Clone)]
pub struct SnapshotAssembler {
    raids: Vec<String>,
}

impl SnapshotAssembler {
    /// Track the given raid slugs
    pub fn new(raids: Vec<String>) -> Self {
        Self { raids }
    }

    pub fn raids(&self) -> &[String] {
        &self.raids
    }

    pub fn assemble(&self, key: &GuildKey, inputs: SnapshotInputs) -> GuildSnapshot {
        let characters = Self::characters(key, &inputs.profile, inputs.bnet_roster.as_ref());
        let guild = Self::guild(key, &inputs, characters.len());
        let progress = self.progress(&inputs.static_data, &inputs.profile);
        let bosses = inputs
            .encounters
            .iter()
            .flat_map(|set| Self::bosses(&inputs.static_data, set))
            .collect();

        GuildSnapshot {
            guild,
            roster_complete: !characters.is_empty(),
            characters,
            progress,
            bosses,
        }
    }

    fn guild(key: &GuildKey, inputs: &SnapshotInputs, roster_size: usize) -> Guild {
        let mut guild = Guild::new(key.clone());

        let faction = inputs
            .bnet_guild
            .as_ref()
            .and_then(|g| g.faction.as_ref())
            .map(|f| f.kind.as_str())
            .or(inputs.profile.faction.as_deref());
        guild.faction = faction.and_then(|f| f.parse::<Faction>().ok());

        guild.member_count = inputs
            .bnet_guild
            .as_ref()
            .and_then(|g| g.member_count)
            .unwrap_or(i32::try_from(roster_size).unwrap_or(i32::MAX));

        guild
    }

    fn characters(key: &GuildKey, profile: &GuildProfile, roster: Option<&BnetRoster>) -> Vec<Character> {
        let mut characters: Vec<Character> = profile
            .members
            .iter()
            .map(|member| {
                let c = &member.character;
                let mut character = Character::new(0, &c.name, &c.realm, &c.class_name, member.rank);
                character.spec_name.clone_from(&c.active_spec_name);
                character.avatar_url.clone_from(&c.thumbnail_url);
                character
            })
            .collect();

        let Some(roster) = roster else {
            return characters;
        };

        for entry in &roster.members {
            let bnet = &entry.character;
            let existing = characters.iter_mut().find(|c| {
                c.name.eq_ignore_ascii_case(&bnet.name) && slugify(&c.realm) == bnet.realm.slug
            });

            match existing {
                Some(character) => {
                    character.blizzard_id = Some(bnet.id);
                    character.level = bnet.level;
                    character.rank = entry.rank;
                }
                None => {
                    let realm = if bnet.realm.slug == key.realm_slug() {
                        key.realm.clone()
                    } else {
                        bnet.realm.slug.clone()
                    };
                    let mut character = Character::new(
                        0,
                        &bnet.name,
                        realm,
                        class_name(bnet.playable_class.id),
                        entry.rank,
                    );
                    character.blizzard_id = Some(bnet.id);
                    character.level = bnet.level;
                    characters.push(character);
                }
            }
        }

        characters
    }

    fn progress(&self, static_data: &RaidStaticData, profile: &GuildProfile) -> Vec<RaidProgress> {
        let mut rows = Vec::new();

        for slug in &self.raids {
            let Some(progression) = profile.raid_progression.get(slug) else {
                continue;
            };
            let raid_name = static_data.raid(slug).map_or(slug.as_str(), |r| r.name.as_str());
            let rankings = profile.raid_rankings.get(slug);
            let total = progression.total_bosses.max(0);

            for difficulty in Difficulty::ALL {
                let killed = progression.killed(difficulty).clamp(0, total);
                match RaidProgress::new(0, raid_name, slug, difficulty, total, killed) {
                    Ok(mut row) => {
                        if let Some(rank) = rankings.and_then(|r| r.for_difficulty(difficulty)) {
                            row.world_rank = non_zero(rank.world);
                            row.region_rank = non_zero(rank.region);
                            row.realm_rank = non_zero(rank.realm);
                        }
                        rows.push(row);
                    }
                    Err(err) => warn!(raid = %slug, %difficulty, error = %err, "Skipping progress row"),
                }
            }
        }

        rows
    }

    fn bosses(static_data: &RaidStaticData, set: &EncounterSet) -> Vec<RaidBoss> {
        let static_raid = static_data.raid(&set.raid_slug);
        let raid_name = static_raid.map_or(set.raid_slug.as_str(), |r| r.name.as_str());

        // Encounter order comes from static data; fall back to the order Raider.io listed them
        let ordered: Vec<(Option<i64>, &str, &str)> = match static_raid {
            Some(raid) if !raid.encounters.is_empty() => raid
                .encounters
                .iter()
                .map(|e| (Some(e.id), e.slug.as_str(), e.name.as_str()))
                .collect(),
            _ => set
                .encounters
                .iter()
                .map(|e| (None, e.slug.as_str(), e.name.as_deref().unwrap_or(e.slug.as_str())))
                .collect(),
        };

        let kills: HashMap<&str, _> = set
            .encounters
            .iter()
            .map(|e| (e.slug.as_str(), e.defeated_at))
            .collect();
        let any_kill = kills.values().any(Option::is_some);
        let mut progress_marked = false;

        ordered
            .into_iter()
            .zip(1..)
            .map(|((encounter_id, slug, name), position)| {
                let defeated_at = kills.get(slug).copied().flatten();
                let mut boss = RaidBoss::new(0, raid_name, &set.raid_slug, slug, name, set.difficulty, position);
                boss.defeated = defeated_at.is_some();
                boss.first_kill_at = defeated_at;

                if !boss.defeated && any_kill && !progress_marked {
                    boss.in_progress = true;
                    progress_marked = true;
                }

                boss.attach(SourcePayload::RaiderIo(RaiderIoBossData {
                    slug: slug.to_string(),
                    encounter_id,
                    defeated_at,
                }));
                boss
            })
            .collect()
    }
}

/// HTTP-backed snapshot source
pub struct GameDataSource {
    raider_io: RaiderIoClient,
    battle_net: Option<BattleNetClient>,
    assembler: SnapshotAssembler,
    expansion_id: u32,
}

impl GameDataSource {
    pub fn new(
        raider_io: RaiderIoClient,
        battle_net: Option<BattleNetClient>,
        assembler: SnapshotAssembler,
        expansion_id: u32,
    ) -> Self {
        Self {
            raider_io,
            battle_net,
            assembler,
            expansion_id,
        }
    }

    /// Build clients from configuration; Battle.net is skipped without credentials
    pub fn from_config(sync: &SyncConfig, battle_net: Option<&BattleNetConfig>) -> Result<Self, SourceError> {
        let raider_io = RaiderIoClient::new(&sync.raider_io_base_url)?;
        let battle_net = battle_net.map(BattleNetClient::new).transpose()?;

        Ok(Self::new(
            raider_io,
            battle_net,
            SnapshotAssembler::new(sync.raids.clone()),
            sync.expansion_id,
        ))
    }

    async fn encounter_sets(&self, key: &GuildKey) -> Result<Vec<EncounterSet>, SourceError> {
        let mut sets = Vec::new();

        for raid_slug in self.assembler.raids() {
            for difficulty in Difficulty::ALL {
                match self.raider_io.raid_encounters(key, raid_slug, difficulty).await {
                    Ok(encounters) => sets.push(EncounterSet {
                        raid_slug: raid_slug.clone(),
                        difficulty,
                        encounters,
                    }),
                    Err(err) if err.is_not_found() => {
                        warn!(raid = %raid_slug, %difficulty, "No encounter data");
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(sets)
    }

    async fn battle_net_data(&self, key: &GuildKey) -> (Option<BnetGuild>, Option<BnetRoster>) {
        let Some(client) = &self.battle_net else {
            return (None, None);
        };

        // Battle.net only enriches; its failures never fail the snapshot
        let (guild, roster) = futures::join!(client.guild(key), client.roster(key));

        (
            guild
                .inspect_err(|err| warn!(error = %err, "Battle.net guild lookup failed"))
                .ok(),
            roster
                .inspect_err(|err| warn!(error = %err, "Battle.net roster lookup failed"))
                .ok(),
        )
    }
}

#[async_trait]
impl GuildSnapshotSource for GameDataSource {
    #[instrument(skip(self), fields(guild = %key))]
    async fn fetch_snapshot(&self, key: &GuildKey) -> Result<GuildSnapshot, SourceError> {
        let (static_data, profile) = futures::try_join!(
            self.raider_io.static_data(self.expansion_id),
            self.raider_io.guild_profile(key),
        )?;
        let encounters = self.encounter_sets(key).await?;
        let (bnet_guild, bnet_roster) = self.battle_net_data(key).await;
        let roster_missing = self.battle_net.is_some() && bnet_roster.is_none();

        let mut snapshot = self.assembler.assemble(
            key,
            SnapshotInputs {
                static_data,
                profile,
                encounters,
                bnet_guild,
                bnet_roster,
            },
        );
        if roster_missing {
            snapshot.roster_complete = false;
        }

        info!(
            characters = snapshot.characters.len(),
            roster_complete = snapshot.roster_complete,
            progress = snapshot.progress.len(),
            bosses = snapshot.bosses.len(),
            "Assembled guild snapshot"
        );

        Ok(snapshot)
    }
}
