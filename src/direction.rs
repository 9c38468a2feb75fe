// WHY: Closed two-valued direction so an unknown locale can only appear at the
// string boundary, where it is rejected with InvalidDirection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;

/// Which locale is the source and which is the target of a translation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    AmericanToBritish,
    BritishToAmerican,
}

impl Direction {
    /// Time separator written by the source locale
    pub fn source_separator(self) -> char {
        match self {
            Direction::AmericanToBritish => ':',
            Direction::BritishToAmerican => '.',
        }
    }

    /// Time separator written by the target locale
    pub fn target_separator(self) -> char {
        self.reversed().source_separator()
    }

    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Direction::AmericanToBritish => Direction::BritishToAmerican,
            Direction::BritishToAmerican => Direction::AmericanToBritish,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::AmericanToBritish => "american-to-british",
            Direction::BritishToAmerican => "british-to-american",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TranslateError;

    /// Accepts the canonical names and the target-locale shorthands
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "american-to-british" | "british" => Ok(Direction::AmericanToBritish),
            "british-to-american" | "american" => Ok(Direction::BritishToAmerican),
            _ => Err(TranslateError::InvalidDirection(s.to_string())),
        }
    }
}
