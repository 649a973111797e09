use crate::error::LeaderboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_YEAR: u16 = 2025;
pub const MAX_WEEK: u8 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    #[default]
    Regular,
    Both,
}

impl SeasonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "both" => Ok(Self::Both),
            other => Err(LeaderboardError::InvalidArgument(format!(
                "unknown season type '{other}' (expected regular or both)"
            ))),
        }
    }
}

/// Year / week / season selection. `week == None` means all weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilters {
    pub year: u16,
    pub week: Option<u8>,
    pub season_type: SeasonType,
}

impl Default for ViewFilters {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            week: None,
            season_type: SeasonType::Regular,
        }
    }
}

/// Accepts only a four-digit year.
pub fn parse_year(raw: &str) -> Option<u16> {
    let raw = raw.trim();
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().filter(|year| *year >= 1000)
}

/// Accepts an integer week in `1..=15`.
pub fn parse_week(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|week| (1..=MAX_WEEK).contains(week))
}
