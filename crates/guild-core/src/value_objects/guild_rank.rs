//! Guild rank table - shared display names for in-game rank indices

/// Fixed guild rank table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuildRank {
    GuildMaster = 0,
    Officer = 1,
    OfficerAlt = 2,
    Raider = 3,
    Trial = 4,
    Alt = 5,
}

impl GuildRank {
    pub const ALL: [GuildRank; 6] = [
        Self::GuildMaster,
        Self::Officer,
        Self::OfficerAlt,
        Self::Raider,
        Self::Trial,
        Self::Alt,
    ];

    /// Look up a rank by its in-game index
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| *rank as i32 == id)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::GuildMaster => "Guild Master",
            Self::Officer => "Officer",
            Self::OfficerAlt => "Officer Alt",
            Self::Raider => "Raider",
            Self::Trial => "Trial",
            Self::Alt => "Alt",
        }
    }
}

/// Display name for a rank index; never fails
pub fn rank_name(id: i32) -> &'static str {
    GuildRank::from_id(id).map_or("Unknown", |rank| rank.name())
}
