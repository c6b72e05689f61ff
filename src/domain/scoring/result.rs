//! The assembled, rounded result of one scoring pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Horizon, Percentage, Role};

use super::consistency::ConsistencyReport;
use super::cross_validation::RoleValidation;
use super::horizon_fit::HorizonFit;
use super::omission::OmissionReport;

/// Averages per horizon, H0 first.
pub type HorizonBreakdown = [f64; Horizon::COUNT];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResult {
    pub score: f64,
    pub horizons: HorizonBreakdown,
    /// The role's percentage reaches its configured minimum.
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResult {
    pub score: f64,
    /// Most frequently tagged horizon among the block's answered items.
    pub horizon: Option<Horizon>,
}

/// Placement on the People (x) by Results (y) grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixResult {
    pub x: f64,
    pub y: f64,
    pub quadrant: u8,
    pub quadrant_name: String,
    pub people_percentage: Percentage,
    pub results_percentage: Percentage,
    pub people_passed: bool,
    pub results_passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DilemmaRecommendation {
    pub dilemma_id: String,
    pub title: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total: Percentage,
    pub matrix: MatrixResult,
    pub roles: BTreeMap<Role, RoleResult>,
    pub horizons: HorizonBreakdown,
    pub blocks: BTreeMap<String, BlockResult>,
    pub categories: BTreeMap<String, f64>,
    pub consistency: ConsistencyReport,
    pub role_validation: RoleValidation,
    pub predominant_horizon: Horizon,
    pub omission_analysis: OmissionReport,
    pub horizon_fit: HorizonFit,
    /// Lowest-scoring category, if any category was scored.
    pub development_focus: Option<String>,
    pub dilemma_recommendations: Vec<DilemmaRecommendation>,
}

impl ScoreResult {
    pub fn role(&self, role: Role) -> Option<&RoleResult> {
        self.roles.get(&role)
    }
}
