//! Domain entities - guild data as persisted by the backend

mod character;
mod guild;
mod payload;
mod raid_boss;
mod raid_progress;

pub use character::Character;
pub use guild::Guild;
pub use payload::{RaiderIoBossData, SourcePayload, WarcraftLogsBossData};
pub use raid_boss::{BossStatus, RaidBoss};
pub use raid_progress::RaidProgress;
