use std::fmt;

use serde::{Deserialize, Serialize};

/// Strength-of-identity tier achieved with an identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LevelOfAssurance {
    #[serde(rename = "LEVEL_1")]
    Level1,
    #[serde(rename = "LEVEL_2")]
    Level2,
}

impl LevelOfAssurance {
    pub const ALL: [LevelOfAssurance; 2] = [LevelOfAssurance::Level1, LevelOfAssurance::Level2];

    pub const fn as_str(self) -> &'static str {
        match self {
            LevelOfAssurance::Level1 => "LEVEL_1",
            LevelOfAssurance::Level2 => "LEVEL_2",
        }
    }

    /// Exact match on the hub's wire names; anything else is unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }
}

impl fmt::Display for LevelOfAssurance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
