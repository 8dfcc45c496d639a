//! Player faction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Alliance,
    Horde,
}

impl Faction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alliance => "alliance",
            Self::Horde => "horde",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Faction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alliance" => Ok(Self::Alliance),
            "horde" => Ok(Self::Horde),
            _ => Err(ParseError::Faction(s.to_string())),
        }
    }
}
