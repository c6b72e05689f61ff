//! Scoring engine for leadership self-assessments.
//!
//! A pass runs in three stages over one answer set:
//!
//! - `normalizer` resolves each answer to a scored or omitted item
//! - `aggregator` folds scored items into per-taxonomy tallies
//! - the analyzers (`matrix`, `consistency`, `cross_validation`, `omission`,
//!   `horizon_fit`) read the tallies independently
//!
//! Rounding happens once, when `engine` assembles the `ScoreResult`.

mod aggregator;
mod consistency;
mod cross_validation;
mod engine;
mod horizon_fit;
mod matrix;
mod normalizer;
mod omission;
mod result;
mod stats;
mod thresholds;
mod weighting;

pub use aggregator::{Aggregates, BlockTally, CategoryTally, OmissionTally, RoleTally};
pub use consistency::{
    classify_roles, CategoryValidation, ClusterStatus, ConsistencyLevel, ConsistencyReport,
    ConsistencyStatus, RoleDispersion, CONTRADICTION_PAIRS,
};
pub use cross_validation::{GapDirection, RoleAlert, RoleValidation};
pub use engine::{score, ScoringEngine};
pub use horizon_fit::{ideal_curve, FitStatus, HorizonFit};
pub use matrix::{Band, Quadrant, HIGH_FLOOR, MEDIUM_FLOOR};
pub use normalizer::{normalize_dilemma, normalize_question, Normalized, OmittedItem, ScoredItem};
pub use omission::OmissionReport;
pub use result::{
    BlockResult, DilemmaRecommendation, HorizonBreakdown, MatrixResult, RoleResult, ScoreResult,
};
pub use stats::{mean, round_to, std_dev, Tally};
pub use thresholds::ScoringThresholds;
pub use weighting::{question_weight, weight, DILEMMA_WEIGHT};
