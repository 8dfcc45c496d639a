//! Model <-> entity mappers
//!
//! - `TryFrom<Model> for Entity`: decode rows, parsing the string-encoded enums
//! - `*Upsert` structs: borrow entity data in the shape both dialects bind

mod character;
mod guild;
mod raid_boss;
mod raid_progress;

pub use character::CharacterUpsert;
pub use guild::GuildUpsert;
pub use raid_boss::RaidBossUpsert;
pub use raid_progress::RaidProgressUpsert;
