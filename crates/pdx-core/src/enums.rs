//! The `Strength` vocabulary for hero/power associations.
//!
//! Stored capitalized (`"Strong"`, `"Weak"`, `"Average"`) — this is the wire
//! and SQL vocabulary, so serde keeps the variant names as-is rather than
//! renaming to snake_case.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// How strongly a hero wields a given power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }
}

impl FromStr for Strength {
    type Err = ValidationError;

    /// Exact match only — `"strong"` or `"STRONG"` are rejected, matching
    /// the stored vocabulary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong" => Ok(Self::Strong),
            "Weak" => Ok(Self::Weak),
            "Average" => Ok(Self::Average),
            _ => Err(ValidationError::Strength),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
