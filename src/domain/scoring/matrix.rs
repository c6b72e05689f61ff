//! 9-box People x Results matrix classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of the Medium band.
pub const MEDIUM_FLOOR: f64 = 2.5;
/// Lower bound (inclusive) of the High band.
pub const HIGH_FLOOR: f64 = 4.0;

/// Half-open score band on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// Low `< 2.5`, Medium `[2.5, 4.0)`, High `>= 4.0`.
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_FLOOR {
            Band::Low
        } else if score < HIGH_FLOOR {
            Band::Medium
        } else {
            Band::High
        }
    }

    fn offset(self) -> u8 {
        match self {
            Band::Low => 0,
            Band::Medium => 1,
            Band::High => 2,
        }
    }
}

/// The nine named quadrants, numbered 1-9 row by row from Low Results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    Technical = 1,
    Executor = 2,
    Demanding = 3,
    Relational = 4,
    Balanced = 5,
    Strategic = 6,
    Inspirational = 7,
    Builder = 8,
    Complete = 9,
}

impl Quadrant {
    const TABLE: [Quadrant; 9] = [
        Quadrant::Technical,
        Quadrant::Executor,
        Quadrant::Demanding,
        Quadrant::Relational,
        Quadrant::Balanced,
        Quadrant::Strategic,
        Quadrant::Inspirational,
        Quadrant::Builder,
        Quadrant::Complete,
    ];

    /// Looks up the quadrant for a People band and a Results band.
    pub fn from_bands(people: Band, results: Band) -> Self {
        Self::TABLE[(results.offset() * 3 + people.offset()) as usize]
    }

    /// Classifies raw axis averages.
    pub fn classify(people: f64, results: f64) -> Self {
        Self::from_bands(Band::from_score(people), Band::from_score(results))
    }

    /// Quadrant number (1-9).
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Quadrant::Technical => "Technical",
            Quadrant::Executor => "Executor",
            Quadrant::Demanding => "Demanding",
            Quadrant::Relational => "Relational",
            Quadrant::Balanced => "Balanced",
            Quadrant::Strategic => "Strategic",
            Quadrant::Inspirational => "Inspirational",
            Quadrant::Builder => "Builder",
            Quadrant::Complete => "Complete",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_and_quadrants_serialize_snake_case() {
        assert_eq!(serde_json::to_value(Band::Medium).unwrap(), "medium");
        assert_eq!(serde_json::to_value(Quadrant::Inspirational).unwrap(), "inspirational");
    }

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(Band::from_score(2.49), Band::Low);
        assert_eq!(Band::from_score(2.5), Band::Medium);
        assert_eq!(Band::from_score(3.99), Band::Medium);
        assert_eq!(Band::from_score(4.0), Band::High);
        assert_eq!(Band::from_score(0.0), Band::Low);
        assert_eq!(Band::from_score(5.0), Band::High);
    }

    #[test]
    fn table_matches_fixed_lookup() {
        use Band::*;
        let expected = [
            (Low, Low, Quadrant::Technical),
            (Medium, Low, Quadrant::Executor),
            (High, Low, Quadrant::Demanding),
            (Low, Medium, Quadrant::Relational),
            (Medium, Medium, Quadrant::Balanced),
            (High, Medium, Quadrant::Strategic),
            (Low, High, Quadrant::Inspirational),
            (Medium, High, Quadrant::Builder),
            (High, High, Quadrant::Complete),
        ];
        for (people, results, quadrant) in expected {
            assert_eq!(Quadrant::from_bands(people, results), quadrant);
        }
    }

    #[test]
    fn quadrant_numbers_run_one_to_nine() {
        assert_eq!(Quadrant::Technical.number(), 1);
        assert_eq!(Quadrant::Balanced.number(), 5);
        assert_eq!(Quadrant::Complete.number(), 9);
    }

    #[test]
    fn medium_people_low_results_is_executor() {
        let q = Quadrant::classify(2.5, 1.0);
        assert_eq!(q, Quadrant::Executor);
        assert_eq!(q.name(), "Executor");
    }
}
