//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Rounds an arbitrary percentage figure to the nearest whole number,
    /// clamping into 0..=100. NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// Percentage of `part` relative to `whole`; zero when `whole` is zero.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole <= 0.0 {
            return Self::ZERO;
        }
        Self::from_f64(part / whole * 100.0)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
