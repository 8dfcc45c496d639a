//! # guild-core
//!
//! Domain layer containing guild entities, value objects, static lookups, and
//! repository traits. This crate has no dependency on infrastructure
//! (database drivers, web framework, HTTP clients).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BossStatus, Character, Guild, RaidBoss, RaidProgress, RaiderIoBossData, SourcePayload,
    WarcraftLogsBossData,
};
pub use error::DomainError;
pub use traits::{
    CharacterRepository, GuildRepository, RaidBossRepository, RaidProgressRepository, RepoResult,
};
pub use value_objects::{
    class_color, class_icon_url, rank_name, ClassColor, Difficulty, Faction, GuildKey, GuildRank,
    ParseError, Region,
};
