//! In-memory repositories and a canned snapshot source for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use guild_core::entities::{Character, Guild, RaidBoss, RaidProgress};
use guild_core::traits::{
    CharacterRepository, GuildRepository, RaidBossRepository, RaidProgressRepository, RepoResult,
};
use guild_core::{Difficulty, DomainError, Faction, GuildKey, RaiderIoBossData, Region, SourcePayload};
use guild_sources::{GuildSnapshot, GuildSnapshotSource, SourceError};

use crate::services::{ServiceContext, ServiceContextBuilder};

pub fn default_key() -> GuildKey {
    GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu)
}

#[derive(Default)]
struct State {
    next_id: i64,
    guilds: Vec<Guild>,
    characters: Vec<Character>,
    progress: Vec<RaidProgress>,
    bosses: Vec<RaidBoss>,
}

impl State {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory store implementing every repository trait
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> ServiceContext {
        self.builder().build().unwrap()
    }

    pub fn context_with_source(&self, source: Arc<dyn GuildSnapshotSource>) -> ServiceContext {
        self.builder().snapshot_source(source).build().unwrap()
    }

    fn builder(&self) -> ServiceContextBuilder {
        ServiceContextBuilder::new()
            .guild_repo(Arc::new(self.clone()))
            .character_repo(Arc::new(self.clone()))
            .raid_progress_repo(Arc::new(self.clone()))
            .raid_boss_repo(Arc::new(self.clone()))
    }

    pub fn seed_guild(&self, key: GuildKey) -> i64 {
        let mut state = self.state.lock().unwrap();
        let mut guild = Guild::new(key);
        guild.id = state.id();
        let id = guild.id;
        state.guilds.push(guild);
        id
    }

    pub fn seed_character(&self, mut character: Character) {
        let mut state = self.state.lock().unwrap();
        character.id = state.id();
        state.characters.push(character);
    }

    pub fn seed_progress(&self, mut progress: RaidProgress) {
        let mut state = self.state.lock().unwrap();
        progress.id = state.id();
        state.progress.push(progress);
    }

    pub fn seed_boss(&self, mut boss: RaidBoss) {
        let mut state = self.state.lock().unwrap();
        boss.id = state.id();
        state.bosses.push(boss);
    }

    pub fn characters(&self) -> Vec<Character> {
        self.state.lock().unwrap().characters.clone()
    }

    pub fn bosses(&self) -> Vec<RaidBoss> {
        self.state.lock().unwrap().bosses.clone()
    }
}

#[async_trait]
impl GuildRepository for MemoryStore {
    async fn find_by_key(&self, key: &GuildKey) -> RepoResult<Option<Guild>> {
        let state = self.state.lock().unwrap();
        Ok(state.guilds.iter().find(|g| g.matches(key)).cloned())
    }

    async fn upsert(&self, guild: &Guild) -> RepoResult<i64> {
        let mut state = self.state.lock().unwrap();
        let key = guild.key();
        if let Some(existing) = state.guilds.iter_mut().find(|g| g.matches(&key)) {
            let id = existing.id;
            *existing = Guild { id, ..guild.clone() };
            return Ok(id);
        }
        let id = state.id();
        state.guilds.push(Guild { id, ..guild.clone() });
        Ok(id)
    }
}

#[async_trait]
impl CharacterRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Character>> {
        let state = self.state.lock().unwrap();
        Ok(state.characters.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<Character>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .characters
            .iter()
            .filter(|c| c.guild_id == guild_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, character: &Character) -> RepoResult<i64> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.characters.iter_mut().find(|c| {
            c.guild_id == character.guild_id && c.name == character.name && c.realm == character.realm
        }) {
            let id = existing.id;
            *existing = Character { id, ..character.clone() };
            return Ok(id);
        }
        let id = state.id();
        state.characters.push(Character { id, ..character.clone() });
        Ok(id)
    }

    async fn update_mythic_score(&self, id: i64, score: Option<f64>) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let character = state
            .characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::CharacterNotFound(id))?;
        character.mythic_score = score;
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.characters.len();
        state.characters.retain(|c| c.id != id);
        if state.characters.len() == before {
            return Err(DomainError::CharacterNotFound(id));
        }
        Ok(())
    }

    async fn delete_stale(&self, guild_id: i64, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.characters.len();
        state
            .characters
            .retain(|c| c.guild_id != guild_id || c.last_updated >= cutoff);
        Ok((before - state.characters.len()) as u64)
    }
}

#[async_trait]
impl RaidProgressRepository for MemoryStore {
    async fn find_by_guild(&self, guild_id: i64) -> RepoResult<Vec<RaidProgress>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .progress
            .iter()
            .filter(|p| p.guild_id == guild_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, progress: &RaidProgress) -> RepoResult<i64> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.progress.iter_mut().find(|p| {
            p.guild_id == progress.guild_id
                && p.raid_slug == progress.raid_slug
                && p.difficulty == progress.difficulty
        }) {
            let id = existing.id;
            *existing = RaidProgress { id, ..progress.clone() };
            return Ok(id);
        }
        let id = state.id();
        state.progress.push(RaidProgress { id, ..progress.clone() });
        Ok(id)
    }
}

#[async_trait]
impl RaidBossRepository for MemoryStore {
    async fn find_by_raid(
        &self,
        guild_id: i64,
        raid: &str,
        difficulty: Difficulty,
    ) -> RepoResult<Vec<RaidBoss>> {
        let state = self.state.lock().unwrap();
        let mut bosses: Vec<RaidBoss> = state
            .bosses
            .iter()
            .filter(|b| {
                b.guild_id == guild_id
                    && b.difficulty == difficulty
                    && (b.raid_name.eq_ignore_ascii_case(raid) || b.raid_slug == raid.to_lowercase())
            })
            .cloned()
            .collect();
        bosses.sort_by_key(|b| b.position);
        Ok(bosses)
    }

    async fn upsert(&self, boss: &RaidBoss) -> RepoResult<i64> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.bosses.iter_mut().find(|b| {
            b.guild_id == boss.guild_id
                && b.raid_slug == boss.raid_slug
                && b.slug == boss.slug
                && b.difficulty == boss.difficulty
        }) {
            let id = existing.id;
            *existing = RaidBoss { id, ..boss.clone() };
            return Ok(id);
        }
        let id = state.id();
        state.bosses.push(RaidBoss { id, ..boss.clone() });
        Ok(id)
    }
}

/// Snapshot of the default guild: two members, 1/8 Mythic
pub fn snapshot() -> GuildSnapshot {
    let mut guild = Guild::new(default_key());
    guild.faction = Some(Faction::Horde);
    guild.member_count = 2;

    let mut krutt = Character::new(0, "Krutt", "Tarren Mill", "Death Knight", 0);
    krutt.mythic_score = Some(2891.37);
    let bladewind = Character::new(0, "Bladewind", "Tarren Mill", "Warrior", 3);

    let progress =
        RaidProgress::new(0, "Liberation of Undermine", "liberation-of-undermine", Difficulty::Mythic, 8, 1)
            .unwrap();

    let bosses = [(1, "vexie-and-the-geargrinders", "Vexie and the Geargrinders"), (2, "cauldron-of-carnage", "Cauldron of Carnage")]
        .into_iter()
        .map(|(position, slug, name)| {
            let mut boss = RaidBoss::new(0, "Liberation of Undermine", "liberation-of-undermine", slug, name, Difficulty::Mythic, position);
            boss.defeated = position == 1;
            boss.in_progress = position == 2;
            boss.attach(SourcePayload::RaiderIo(RaiderIoBossData {
                slug: slug.to_string(),
                encounter_id: None,
                defeated_at: None,
            }));
            boss
        })
        .collect();

    GuildSnapshot {
        guild,
        characters: vec![krutt, bladewind],
        progress: vec![progress],
        bosses,
        roster_complete: true,
    }
}

/// Snapshot source returning a canned snapshot, or failing like a down upstream
pub struct FakeSource {
    snapshot: Option<GuildSnapshot>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(snapshot: GuildSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            snapshot: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GuildSnapshotSource for FakeSource {
    async fn fetch_snapshot(&self, _key: &GuildKey) -> Result<GuildSnapshot, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshot.clone().ok_or_else(|| SourceError::Status {
            service: "raider.io",
            status: 503,
            url: "https://raider.io/api/v1/guilds/profile".to_string(),
        })
    }
}
