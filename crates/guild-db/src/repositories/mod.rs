//! Repository implementations
//!
//! One implementation of each `guild-core` repository trait per dialect.
//! [`Repositories`] bundles them behind trait objects so the service layer
//! never sees which backend is in use.

mod error;
mod mysql;
mod postgres;

use std::sync::Arc;

use guild_core::traits::{
    CharacterRepository, GuildRepository, RaidBossRepository, RaidProgressRepository,
};
use sqlx::{MySqlPool, PgPool};

pub use mysql::{
    MySqlCharacterRepository, MySqlGuildRepository, MySqlRaidBossRepository,
    MySqlRaidProgressRepository,
};
pub use postgres::{
    PgCharacterRepository, PgGuildRepository, PgRaidBossRepository, PgRaidProgressRepository,
};

/// Repository handles sharing one pool
#[derive(Clone)]
pub struct Repositories {
    pub guilds: Arc<dyn GuildRepository>,
    pub characters: Arc<dyn CharacterRepository>,
    pub raid_progress: Arc<dyn RaidProgressRepository>,
    pub raid_bosses: Arc<dyn RaidBossRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            guilds: Arc::new(PgGuildRepository::new(pool.clone())),
            characters: Arc::new(PgCharacterRepository::new(pool.clone())),
            raid_progress: Arc::new(PgRaidProgressRepository::new(pool.clone())),
            raid_bosses: Arc::new(PgRaidBossRepository::new(pool)),
        }
    }

    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            guilds: Arc::new(MySqlGuildRepository::new(pool.clone())),
            characters: Arc::new(MySqlCharacterRepository::new(pool.clone())),
            raid_progress: Arc::new(MySqlRaidProgressRepository::new(pool.clone())),
            raid_bosses: Arc::new(MySqlRaidBossRepository::new(pool)),
        }
    }
}
