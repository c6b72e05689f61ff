//! Fit of the horizon profile against the ideal curve for a level.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Horizon, RespondentLevel};

use super::stats::{mean, round_to};

/// Expected average per horizon, H0 to H4, for each level.
pub fn ideal_curve(level: RespondentLevel) -> [f64; Horizon::COUNT] {
    match level {
        RespondentLevel::L1 => [4.2, 4.0, 3.0, 2.0, 1.5],
        RespondentLevel::L2 => [3.5, 4.0, 4.2, 3.0, 2.0],
        RespondentLevel::L3 => [2.0, 3.0, 4.0, 4.5, 3.5],
        RespondentLevel::L4 => [1.5, 2.5, 3.5, 4.5, 4.5],
    }
}

/// Where a horizon average sits relative to its ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStatus {
    Above,
    Within,
    Below,
}

impl FitStatus {
    /// Above when `gap > band`, Below when `gap < -band`, otherwise Within.
    pub fn from_gap(gap: f64, band: f64) -> Self {
        if gap > band {
            FitStatus::Above
        } else if gap < -band {
            FitStatus::Below
        } else {
            FitStatus::Within
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonFit {
    pub ideal: [f64; Horizon::COUNT],
    /// `actual - ideal` per horizon, to one decimal.
    pub gaps: [f64; Horizon::COUNT],
    pub statuses: [FitStatus; Horizon::COUNT],
    /// Horizon furthest below its ideal, if any falls short.
    pub largest_shortfall: Option<Horizon>,
    pub mean_role_score: f64,
}

/// Compares unrounded horizon averages with the ideal curve of `level`.
/// Gaps within `band` of the ideal read as [`FitStatus::Within`].
pub fn horizon_fit(
    level: RespondentLevel,
    horizon_averages: &[f64; Horizon::COUNT],
    role_averages: &[f64],
    band: f64,
) -> HorizonFit {
    let ideal = ideal_curve(level);
    let raw_gaps: [f64; Horizon::COUNT] =
        std::array::from_fn(|i| horizon_averages[i] - ideal[i]);

    let largest_shortfall = Horizon::ALL
        .into_iter()
        .filter(|h| raw_gaps[h.index()] < 0.0)
        .fold(None, |best: Option<Horizon>, h| match best {
            Some(b) if raw_gaps[b.index()] <= raw_gaps[h.index()] => Some(b),
            _ => Some(h),
        });

    HorizonFit {
        ideal,
        gaps: raw_gaps.map(|g| round_to(g, 1)),
        statuses: raw_gaps.map(|g| FitStatus::from_gap(g, band)),
        largest_shortfall,
        mean_role_score: round_to(mean(role_averages), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_are_actual_minus_ideal() {
        let fit = horizon_fit(
            RespondentLevel::L1,
            &[4.2, 3.0, 3.0, 2.5, 1.5],
            &[4.0, 3.0, 3.0, 2.0],
            0.5,
        );

        assert_eq!(fit.gaps, [0.0, -1.0, 0.0, 0.5, 0.0]);
        assert_eq!(fit.largest_shortfall, Some(Horizon::Short));
        assert_eq!(fit.mean_role_score, 3.0);
    }

    #[test]
    fn no_shortfall_when_every_horizon_meets_ideal() {
        let fit = horizon_fit(RespondentLevel::L4, &[5.0; 5], &[5.0; 4], 0.5);
        assert_eq!(fit.largest_shortfall, None);
    }

    #[test]
    fn shortfall_ties_resolve_to_lowest_horizon() {
        let fit = horizon_fit(RespondentLevel::L2, &[2.5, 3.0, 4.2, 3.0, 2.0], &[], 0.5);
        assert_eq!(fit.largest_shortfall, Some(Horizon::Immediate));
    }

    #[test]
    fn band_edges_read_as_within() {
        assert_eq!(FitStatus::from_gap(0.5, 0.5), FitStatus::Within);
        assert_eq!(FitStatus::from_gap(-0.5, 0.5), FitStatus::Within);
        assert_eq!(FitStatus::from_gap(0.0, 0.5), FitStatus::Within);
        assert_eq!(FitStatus::from_gap(0.5001, 0.5), FitStatus::Above);
        assert_eq!(FitStatus::from_gap(-0.5001, 0.5), FitStatus::Below);
    }

    #[test]
    fn statuses_follow_unrounded_gaps() {
        // L3 ideal is [2.0, 3.0, 4.0, 4.5, 3.5].
        let fit = horizon_fit(
            RespondentLevel::L3,
            &[2.5, 2.5, 4.55, 3.95, 4.5],
            &[],
            0.5,
        );

        assert_eq!(
            fit.statuses,
            [
                FitStatus::Within,
                FitStatus::Within,
                FitStatus::Above,
                FitStatus::Below,
                FitStatus::Above,
            ]
        );
    }

    #[test]
    fn wider_band_absorbs_gaps() {
        let fit = horizon_fit(RespondentLevel::L4, &[2.5, 2.5, 3.5, 3.5, 5.0], &[], 1.0);
        assert!(fit.statuses.iter().all(|s| *s == FitStatus::Within));
    }
}
