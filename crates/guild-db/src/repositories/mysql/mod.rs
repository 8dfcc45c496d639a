//! MySQL repositories
//!
//! Upserts use `ON DUPLICATE KEY UPDATE id = LAST_INSERT_ID(id)` so the
//! affected row's id comes back through `last_insert_id()` on both paths.

mod character;
mod guild;
mod raid_boss;
mod raid_progress;

pub use character::MySqlCharacterRepository;
pub use guild::MySqlGuildRepository;
pub use raid_boss::MySqlRaidBossRepository;
pub use raid_progress::MySqlRaidProgressRepository;
