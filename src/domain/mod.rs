//! Domain layer: value objects, the item catalog and the scoring engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (Likert values, horizons, roles, levels, errors)
//! - `catalog` - Questions, dilemmas and answer sets
//! - `scoring` - Pure scoring pass producing a `ScoreResult`

pub mod catalog;
pub mod foundation;
pub mod scoring;
