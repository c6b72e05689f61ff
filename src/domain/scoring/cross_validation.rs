//! Declarative versus situational role scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Role;

use super::aggregator::RoleTally;
use super::stats::round_to;

/// Which way the declarative score leans relative to dilemma behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapDirection {
    Overestimated,
    Underestimated,
}

impl GapDirection {
    fn from_gap(declared: f64, situational: f64) -> Self {
        if declared > situational {
            GapDirection::Overestimated
        } else {
            GapDirection::Underestimated
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GapDirection::Overestimated => "overestimated",
            GapDirection::Underestimated => "underestimated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAlert {
    pub role: Role,
    pub declared_score: f64,
    pub situational_score: f64,
    pub gap: f64,
    pub direction: GapDirection,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleValidation {
    /// In canonical role order.
    pub alerts: Vec<RoleAlert>,
}

impl RoleValidation {
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// Flags roles whose overall and dilemma-only averages diverge by more than
/// `threshold`. Roles without dilemma contributions are skipped.
pub fn cross_validate(roles: &BTreeMap<Role, RoleTally>, threshold: f64) -> RoleValidation {
    let alerts = roles
        .iter()
        .filter(|(_, tally)| !tally.situational.is_empty())
        .filter_map(|(role, tally)| {
            let declared = tally.overall.mean();
            let situational = tally.situational.mean();
            let gap = (declared - situational).abs();
            if gap <= threshold {
                return None;
            }

            let direction = GapDirection::from_gap(declared, situational);
            Some(RoleAlert {
                role: *role,
                declared_score: round_to(declared, 2),
                situational_score: round_to(situational, 2),
                gap: round_to(gap, 2),
                direction,
                message: format!(
                    "{}: declared score {:.2} versus {:.2} in situational dilemmas; your self-assessment appears {}.",
                    role.label(),
                    declared,
                    situational,
                    direction.label()
                ),
            })
        })
        .collect();

    RoleValidation { alerts }
}
