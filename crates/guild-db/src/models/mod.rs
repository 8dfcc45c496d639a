//! Database models - SQLx-compatible row structs
//!
//! Column types are chosen so one struct decodes from both PostgreSQL and
//! MySQL rows. Enumerations are stored as lowercase strings.

mod character;
mod guild;
mod raid_boss;
mod raid_progress;

pub use character::CharacterModel;
pub use guild::GuildModel;
pub use raid_boss::RaidBossModel;
pub use raid_progress::RaidProgressModel;
