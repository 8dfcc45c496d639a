//! Value objects - immutable types and total lookup tables

mod class_color;
mod difficulty;
mod faction;
mod guild_key;
mod guild_rank;
mod region;

pub use class_color::{class_color, class_icon_url, ClassColor, CLASS_ICON_BASE_URL};
pub use difficulty::Difficulty;
pub use faction::Faction;
pub use guild_key::{slugify, GuildKey};
pub use guild_rank::{rank_name, GuildRank};
pub use region::Region;

/// Error when parsing a value object from its string form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown region: {0}")]
    Region(String),

    #[error("unknown difficulty: {0}")]
    Difficulty(String),

    #[error("unknown faction: {0}")]
    Faction(String),
}
