//! Stat-category selector for player performance queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which aggregate blocks a performance query computes.
///
/// `Fielding` is part of the declared enum but has no computation block;
/// a pure-fielding request yields an empty performance mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    Batting,
    Bowling,
    Fielding,
    #[default]
    All,
}

impl StatType {
    /// Whether the batting block is computed.
    pub fn includes_batting(&self) -> bool {
        matches!(self, StatType::Batting | StatType::All)
    }

    /// Whether the bowling block is computed.
    pub fn includes_bowling(&self) -> bool {
        matches!(self, StatType::Bowling | StatType::All)
    }

    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatType::Batting => "batting",
            StatType::Bowling => "bowling",
            StatType::Fielding => "fielding",
            StatType::All => "all",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
