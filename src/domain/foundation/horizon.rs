//! Time horizon taxonomy (H0 immediate through H4 legacy/expansion).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Ordinal time horizon a behaviour operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Horizon {
    /// H0 - day-to-day.
    Immediate,
    /// H1 - weeks to a quarter.
    Short,
    /// H2 - systemic, cross-area.
    Medium,
    /// H3 - strategic, multi-year.
    Long,
    /// H4 - purpose, legacy and expansion.
    Expansion,
}

impl Horizon {
    /// Number of horizon slots.
    pub const COUNT: usize = 5;

    /// All horizons in ordinal order.
    pub const ALL: [Horizon; Self::COUNT] = [
        Horizon::Immediate,
        Horizon::Short,
        Horizon::Medium,
        Horizon::Long,
        Horizon::Expansion,
    ];

    /// Resolves a horizon from its ordinal index.
    pub fn from_index(index: u8) -> Result<Self, ValidationError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| ValidationError::out_of_range("horizon", 0, 4, index as i32))
    }

    /// Returns the ordinal index (0-4).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::Immediate => "Immediate",
            Horizon::Short => "Short",
            Horizon::Medium => "Medium",
            Horizon::Long => "Long",
            Horizon::Expansion => "Expansion",
        }
    }
}

impl TryFrom<u8> for Horizon {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Horizon> for u8 {
    fn from(horizon: Horizon) -> Self {
        horizon as u8
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.index())
    }
}
