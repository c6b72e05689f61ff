//! Level-dependent horizon weights for the headline score.

use crate::domain::foundation::{Horizon, RespondentLevel};

/// Weight of an item on `horizon` for a respondent at `level`.
///
/// Each level boosts the one or two horizons in focus for its scope of
/// leadership; everything else weighs 1.0.
pub fn weight(level: RespondentLevel, horizon: Horizon) -> f64 {
    use Horizon::*;
    match (level, horizon) {
        (RespondentLevel::L1, Immediate | Short) => 1.5,
        (RespondentLevel::L2, Short | Medium) => 1.25,
        (RespondentLevel::L3, Medium | Long) => 1.5,
        _ => 1.0,
    }
}

/// Weight of a question tagged with several horizons: the largest boost
/// among its horizons, 1.0 when it has none.
pub fn question_weight(level: RespondentLevel, horizons: &[Horizon]) -> f64 {
    horizons
        .iter()
        .map(|h| weight(level, *h))
        .fold(1.0, f64::max)
}

/// Dilemmas are horizon-agnostic for the headline score.
pub const DILEMMA_WEIGHT: f64 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l1_boosts_immediate_and_short() {
        assert_eq!(weight(RespondentLevel::L1, Horizon::Immediate), 1.5);
        assert_eq!(weight(RespondentLevel::L1, Horizon::Short), 1.5);
        assert_eq!(weight(RespondentLevel::L1, Horizon::Medium), 1.0);
    }

    #[test]
    fn l2_boosts_short_and_medium() {
        assert_eq!(weight(RespondentLevel::L2, Horizon::Short), 1.25);
        assert_eq!(weight(RespondentLevel::L2, Horizon::Medium), 1.25);
        assert_eq!(weight(RespondentLevel::L2, Horizon::Long), 1.0);
    }

    #[test]
    fn l3_boosts_medium_and_long() {
        assert_eq!(weight(RespondentLevel::L3, Horizon::Long), 1.5);
        assert_eq!(weight(RespondentLevel::L3, Horizon::Immediate), 1.0);
    }

    #[test]
    fn l4_has_no_boost() {
        for h in Horizon::ALL {
            assert_eq!(weight(RespondentLevel::L4, h), 1.0);
        }
    }

    #[test]
    fn multi_horizon_question_takes_largest_boost() {
        let horizons = [Horizon::Long, Horizon::Short];
        assert_eq!(question_weight(RespondentLevel::L1, &horizons), 1.5);
        assert_eq!(question_weight(RespondentLevel::L1, &[]), 1.0);
    }
}
