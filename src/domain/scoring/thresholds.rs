//! Tunable limits for the consistency, cross-validation, horizon fit and
//! pass/fail checks.
//!
//! The pair-gap and cluster thresholds live on different scales (a gap
//! between two answers vs. a standard deviation) and are kept separate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Axis, Role};

/// Every numeric threshold the scoring pass compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    /// Gap between an avoidant item and its active counterparts that flags an inconsistency.
    pub contradiction_pair_gap: f64,
    /// Within-category standard deviation at or above which the category is inconsistent.
    pub category_cluster_std_dev: f64,
    /// Declarative vs. situational role gap above which an alert is raised.
    pub cross_validation_gap: f64,

    /// A role at or above this average counts as very high.
    pub contradictory_high: f64,
    /// A foundational role at or below this average counts as very low.
    pub contradictory_low: f64,
    /// Role dispersion above this is fragmented.
    pub fragmented_std_dev: f64,
    /// A role strictly below this average is critically low.
    pub critical_role: f64,
    /// Number of critically low roles that makes a profile fragmented.
    pub critical_role_count: usize,
    /// Upper side of a high/low split (max role at or above).
    pub split_high: f64,
    /// Lower side of a high/low split (min role at or below).
    pub split_low: f64,
    /// Role dispersion at or above this is imbalanced.
    pub imbalanced_std_dev: f64,
    /// Max-min role spread above this is imbalanced.
    pub imbalanced_spread: f64,
    /// Role dispersion at or below this may be consistent.
    pub consistent_std_dev: f64,
    /// Weakest role must be at least this for a consistent profile.
    pub consistent_min_role: f64,
    /// A role strictly above this is strong.
    pub strong_role: f64,
    /// Number of strong roles a consistent profile needs.
    pub strong_role_count: usize,

    /// Half-width of the band around the ideal curve that reads as within ideal.
    pub horizon_fit_band: f64,

    /// Minimum percentages (0-100) an axis or role average must reach to pass.
    pub people_minimum: u8,
    pub results_minimum: u8,
    pub leader_minimum: u8,
    pub manager_minimum: u8,
    pub strategist_minimum: u8,
    pub intrapreneur_minimum: u8,
}

impl ScoringThresholds {
    pub fn axis_minimum(&self, axis: Axis) -> u8 {
        match axis {
            Axis::People => self.people_minimum,
            Axis::Results => self.results_minimum,
        }
    }

    pub fn role_minimum(&self, role: Role) -> u8 {
        match role {
            Role::Leader => self.leader_minimum,
            Role::Manager => self.manager_minimum,
            Role::Strategist => self.strategist_minimum,
            Role::Intrapreneur => self.intrapreneur_minimum,
        }
    }
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            contradiction_pair_gap: 2.0,
            category_cluster_std_dev: 1.2,
            cross_validation_gap: 1.25,
            contradictory_high: 4.5,
            contradictory_low: 2.5,
            fragmented_std_dev: 0.90,
            critical_role: 2.8,
            critical_role_count: 2,
            split_high: 4.0,
            split_low: 2.5,
            imbalanced_std_dev: 0.56,
            imbalanced_spread: 1.5,
            consistent_std_dev: 0.30,
            consistent_min_role: 3.0,
            strong_role: 4.0,
            strong_role_count: 2,
            horizon_fit_band: 0.5,
            people_minimum: 65,
            results_minimum: 55,
            leader_minimum: 70,
            manager_minimum: 60,
            strategist_minimum: 40,
            intrapreneur_minimum: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_cascade_ordered() {
        let t = ScoringThresholds::default();
        assert!(t.consistent_std_dev < t.imbalanced_std_dev);
        assert!(t.imbalanced_std_dev < t.fragmented_std_dev);
        assert!(t.contradictory_low < t.contradictory_high);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let t: ScoringThresholds =
            serde_json::from_str(r#"{"cross_validation_gap": 1.5}"#).unwrap();
        assert_eq!(t.cross_validation_gap, 1.5);
        assert_eq!(t.category_cluster_std_dev, 1.2);
    }

    #[test]
    fn minimums_resolve_per_axis_and_role() {
        let t = ScoringThresholds::default();
        assert_eq!(t.axis_minimum(Axis::People), 65);
        assert_eq!(t.axis_minimum(Axis::Results), 55);
        assert_eq!(t.role_minimum(Role::Leader), 70);
        assert_eq!(t.role_minimum(Role::Manager), 60);
        assert_eq!(t.role_minimum(Role::Strategist), 40);
        assert_eq!(t.role_minimum(Role::Intrapreneur), 50);
    }
}
