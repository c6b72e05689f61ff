//! Likert value object for the fixed 1-5 response scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A response on the 1 (strongly disagree / low) to 5 (strongly agree / high) scale.
///
/// Dilemma options use the same scale with only 1, 3 and 5 authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertValue(u8);

impl LikertValue {
    pub const MIN: Self = Self(1);
    pub const MID: Self = Self(3);
    pub const MAX: Self = Self(5);

    /// Creates a LikertValue, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("likert", 1, 5, value as i32));
        }
        Ok(Self(value))
    }

    /// Reflects the value around the scale midpoint (`6 - v`).
    pub fn inverted(self) -> Self {
        Self(6 - self.0)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float for accumulation.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for LikertValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<LikertValue> for u8 {
    fn from(value: LikertValue) -> Self {
        value.0
    }
}

impl fmt::Display for LikertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likert_accepts_scale_values() {
        for v in 1..=5 {
            assert_eq!(LikertValue::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn likert_rejects_values_outside_scale() {
        assert!(LikertValue::try_new(0).is_err());
        assert!(LikertValue::try_new(6).is_err());
    }

    #[test]
    fn likert_inversion_reflects_around_midpoint() {
        assert_eq!(LikertValue::MIN.inverted(), LikertValue::MAX);
        assert_eq!(LikertValue::MID.inverted(), LikertValue::MID);
        assert_eq!(LikertValue::try_new(2).unwrap().inverted().value(), 4);
    }

    #[test]
    fn likert_deserialize_validates_range() {
        let ok: LikertValue = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<LikertValue>("9").is_err());
    }
}
