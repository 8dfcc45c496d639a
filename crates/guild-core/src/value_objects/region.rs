//! Region - geographic partition of the game's realms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Battle.net region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Eu,
    Us,
    Kr,
    Tw,
    Cn,
}

impl Region {
    /// Lowercase code used in query strings and external API calls
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eu => "eu",
            Self::Us => "us",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
        }
    }

    /// Locale used for localized Battle.net responses in this region
    pub const fn locale(&self) -> &'static str {
        match self {
            Self::Eu => "en_GB",
            Self::Us => "en_US",
            Self::Kr => "ko_KR",
            Self::Tw => "zh_TW",
            Self::Cn => "zh_CN",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eu" => Ok(Self::Eu),
            "us" => Ok(Self::Us),
            "kr" => Ok(Self::Kr),
            "tw" => Ok(Self::Tw),
            "cn" => Ok(Self::Cn),
            _ => Err(ParseError::Region(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!(" us ".parse::<Region>().unwrap(), Region::Us);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "mars".parse::<Region>().unwrap_err();
        assert_eq!(err.to_string(), "unknown region: mars");
    }

    #[test]
    fn test_default_is_eu() {
        assert_eq!(Region::default().to_string(), "eu");
    }
}
