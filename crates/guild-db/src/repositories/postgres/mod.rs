//! PostgreSQL repositories

mod character;
mod guild;
mod raid_boss;
mod raid_progress;

pub use character::PgCharacterRepository;
pub use guild::PgGuildRepository;
pub use raid_boss::PgRaidBossRepository;
pub use raid_progress::PgRaidProgressRepository;
