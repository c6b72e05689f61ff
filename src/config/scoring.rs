//! Scoring threshold validation

use crate::domain::scoring::ScoringThresholds;

use super::error::ValidationError;

impl ScoringThresholds {
    /// Validate scoring thresholds
    ///
    /// Every limit must be positive, pass minimums are percentages, and the dispersion cascade must keep
    /// Consistent below Imbalanced below Fragmented.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = [
            ("contradiction_pair_gap", self.contradiction_pair_gap),
            ("category_cluster_std_dev", self.category_cluster_std_dev),
            ("cross_validation_gap", self.cross_validation_gap),
            ("contradictory_high", self.contradictory_high),
            ("contradictory_low", self.contradictory_low),
            ("fragmented_std_dev", self.fragmented_std_dev),
            ("critical_role", self.critical_role),
            ("split_high", self.split_high),
            ("split_low", self.split_low),
            ("imbalanced_std_dev", self.imbalanced_std_dev),
            ("imbalanced_spread", self.imbalanced_spread),
            ("consistent_std_dev", self.consistent_std_dev),
            ("consistent_min_role", self.consistent_min_role),
            ("strong_role", self.strong_role),
            ("horizon_fit_band", self.horizon_fit_band),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ValidationError::NonPositiveThreshold(*name));
        }
        if self.critical_role_count == 0 {
            return Err(ValidationError::NonPositiveThreshold("critical_role_count"));
        }
        if self.strong_role_count == 0 {
            return Err(ValidationError::NonPositiveThreshold("strong_role_count"));
        }

        let minimums = [
            ("people_minimum", self.people_minimum),
            ("results_minimum", self.results_minimum),
            ("leader_minimum", self.leader_minimum),
            ("manager_minimum", self.manager_minimum),
            ("strategist_minimum", self.strategist_minimum),
            ("intrapreneur_minimum", self.intrapreneur_minimum),
        ];
        if let Some((name, _)) = minimums.iter().find(|(_, v)| *v > 100) {
            return Err(ValidationError::PercentageOutOfRange(*name));
        }

        if self.consistent_std_dev >= self.imbalanced_std_dev {
            return Err(ValidationError::ThresholdOrder(
                "consistent_std_dev must be below imbalanced_std_dev",
            ));
        }
        if self.imbalanced_std_dev > self.fragmented_std_dev {
            return Err(ValidationError::ThresholdOrder(
                "imbalanced_std_dev must not exceed fragmented_std_dev",
            ));
        }
        if self.contradictory_low >= self.contradictory_high {
            return Err(ValidationError::ThresholdOrder(
                "contradictory_low must be below contradictory_high",
            ));
        }
        if self.split_low >= self.split_high {
            return Err(ValidationError::ThresholdOrder(
                "split_low must be below split_high",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_valid() {
        assert!(ScoringThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let thresholds = ScoringThresholds {
            cross_validation_gap: 0.0,
            ..Default::default()
        };
        assert_eq!(
            thresholds.validate(),
            Err(ValidationError::NonPositiveThreshold("cross_validation_gap"))
        );
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let thresholds = ScoringThresholds {
            category_cluster_std_dev: f64::NAN,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_cascade() {
        let thresholds = ScoringThresholds {
            consistent_std_dev: 0.7,
            ..Default::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ValidationError::ThresholdOrder(_))
        ));
    }

    #[test]
    fn test_rejects_minimum_above_hundred() {
        let thresholds = ScoringThresholds {
            leader_minimum: 101,
            ..Default::default()
        };
        assert_eq!(
            thresholds.validate(),
            Err(ValidationError::PercentageOutOfRange("leader_minimum"))
        );
    }

    #[test]
    fn test_rejects_zero_fit_band() {
        let thresholds = ScoringThresholds {
            horizon_fit_band: 0.0,
            ..Default::default()
        };
        assert_eq!(
            thresholds.validate(),
            Err(ValidationError::NonPositiveThreshold("horizon_fit_band"))
        );
    }

    #[test]
    fn test_rejects_zero_role_counts() {
        let thresholds = ScoringThresholds {
            strong_role_count: 0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }
}
