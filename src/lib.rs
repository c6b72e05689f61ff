//! Leadership Assessment - Scoring engine for leadership self-assessments
//!
//! This crate turns Likert answers and scenario dilemma choices into a
//! profile across behavioral axes, roles, time horizons, categories and
//! thematic blocks, with consistency, cross-validation and omission
//! diagnostics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
