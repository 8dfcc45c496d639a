//! Raid difficulty tiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Raid difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Normal,
    Heroic,
    #[default]
    Mythic,
}

impl Difficulty {
    /// All difficulties, hardest first
    pub const ALL: [Difficulty; 3] = [Self::Mythic, Self::Heroic, Self::Normal];

    /// Lowercase code used in storage and query strings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Heroic => "heroic",
            Self::Mythic => "mythic",
        }
    }

    /// Capitalized name for display
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Heroic => "Heroic",
            Self::Mythic => "Mythic",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "heroic" => Ok(Self::Heroic),
            "mythic" => Ok(Self::Mythic),
            _ => Err(ParseError::Difficulty(s.to_string())),
        }
    }
}
