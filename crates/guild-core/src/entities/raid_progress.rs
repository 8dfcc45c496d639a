//! Raid progress entity - bosses defeated per raid and difficulty

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Difficulty;

/// Raid progress for one raid tier at one difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidProgress {
    /// Database id, 0 until persisted
    pub id: i64,
    pub guild_id: i64,
    /// Display name ("Liberation of Undermine")
    pub raid_name: String,
    pub raid_slug: String,
    pub difficulty: Difficulty,
    /// Total bosses in the raid
    pub bosses: i32,
    pub bosses_defeated: i32,
    pub world_rank: Option<i32>,
    pub region_rank: Option<i32>,
    pub realm_rank: Option<i32>,
    pub last_updated: DateTime<Utc>,
}

impl RaidProgress {
    /// Create unsaved progress; `0 <= bosses_defeated <= bosses` must hold
    pub fn new(
        guild_id: i64,
        raid_name: impl Into<String>,
        raid_slug: impl Into<String>,
        difficulty: Difficulty,
        bosses: i32,
        bosses_defeated: i32,
    ) -> Result<Self, DomainError> {
        let progress = Self {
            id: 0,
            guild_id,
            raid_name: raid_name.into(),
            raid_slug: raid_slug.into(),
            difficulty,
            bosses,
            bosses_defeated,
            world_rank: None,
            region_rank: None,
            realm_rank: None,
            last_updated: Utc::now(),
        };
        progress.validate()?;
        Ok(progress)
    }

    /// Check the boss count invariant
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.bosses < 0 || self.bosses_defeated < 0 || self.bosses_defeated > self.bosses {
            return Err(DomainError::InvalidProgress {
                defeated: self.bosses_defeated,
                total: self.bosses,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.bosses > 0 && self.bosses_defeated == self.bosses
    }

    /// Short summary, e.g. "3/8 Mythic"
    pub fn summary(&self) -> String {
        format!(
            "{}/{} {}",
            self.bosses_defeated,
            self.bosses,
            self.difficulty.display_name()
        )
    }
}
