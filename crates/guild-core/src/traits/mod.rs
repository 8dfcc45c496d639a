//! Domain traits (ports)

mod repositories;

pub use repositories::{
    CharacterRepository, GuildRepository, RaidBossRepository, RaidProgressRepository, RepoResult,
};
