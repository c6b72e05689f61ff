//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod horizon;
mod ids;
mod level;
mod likert;
mod percentage;
mod taxonomy;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use horizon::Horizon;
pub use ids::AssessmentId;
pub use level::{QuestionLevel, RespondentLevel};
pub use likert::LikertValue;
pub use percentage::Percentage;
pub use taxonomy::{Axis, AxisTag, Role};
pub use timestamp::Timestamp;
