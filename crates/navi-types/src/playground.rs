//! Playground status of a venue.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a venue has a play area, and if so whether it costs money.
///
/// Serializes as `"none"`, `"free"` or `"paid"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Playground {
    /// No play area, or unknown.
    #[default]
    None,
    /// Free play area.
    Free,
    /// Paid play area.
    Paid,
}

impl Playground {
    /// Returns the canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Playground::None => "none",
            Playground::Free => "free",
            Playground::Paid => "paid",
        }
    }

    /// Returns true if the venue has a play area at all.
    #[inline]
    pub fn is_available(&self) -> bool {
        !matches!(self, Playground::None)
    }
}

impl fmt::Display for Playground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the canonical names.
///
/// Spreadsheet cells are not parsed with this; they go through the
/// lenient token matcher in `navi-sheet`.
impl FromStr for Playground {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Playground::None),
            "free" => Ok(Playground::Free),
            "paid" => Ok(Playground::Paid),
            other => Err(TypeError::InvalidPlayground(other.to_string())),
        }
    }
}
