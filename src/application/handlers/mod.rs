//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{AssessmentScored, ScoreAssessmentCommand, ScoreAssessmentHandler};
