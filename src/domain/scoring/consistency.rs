//! Consistency validation: role dispersion, contradiction pairs and
//! per-category answer clusters.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::catalog::{AnswerMap, Question};
use crate::domain::foundation::{Percentage, Role};

use super::aggregator::CategoryTally;
use super::normalizer::resolved_value;
use super::stats::{mean, round_to, std_dev};
use super::thresholds::ScoringThresholds;

/// Role dispersion at which the consistency index reaches zero.
const CONSISTENCY_INDEX_SPAN: f64 = 1.5;

/// Avoidant item id -> active item ids expected to move the other way.
pub static CONTRADICTION_PAIRS: Lazy<BTreeMap<u32, Vec<u32>>> = Lazy::new(|| {
    BTreeMap::from([
        (10, vec![6]),
        (22, vec![13, 14]),
        (49, vec![40, 42]),
        (62, vec![6]),
        (80, vec![67, 69]),
        (99, vec![92, 93]),
        (110, vec![102]),
        (149, vec![139]),
        (199, vec![193]),
    ])
});

/// Profile status derived from the spread of the four role averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyStatus {
    Consistent,
    Balanced,
    Imbalanced,
    Fragmented,
    Contradictory,
}

impl ConsistencyStatus {
    pub fn message(&self) -> &'static str {
        match self {
            ConsistencyStatus::Consistent => {
                "You demonstrate balanced practices and maturity between intention and behavior."
            }
            ConsistencyStatus::Balanced => {
                "You show natural tendencies toward some roles while keeping good overall coherence."
            }
            ConsistencyStatus::Imbalanced => {
                "You have clear strengths, but marked weaknesses in other roles."
            }
            ConsistencyStatus::Fragmented => {
                "Your profile reveals important inconsistencies between fundamental roles."
            }
            ConsistencyStatus::Contradictory => {
                "There is a misalignment between your aspirational vision and your daily practice."
            }
        }
    }
}

/// Coarse reading of role dispersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyLevel {
    High,
    Moderate,
    Low,
}

impl ConsistencyLevel {
    pub fn from_std_dev(std_dev: f64) -> Self {
        if std_dev <= 0.30 {
            ConsistencyLevel::High
        } else if std_dev <= 0.60 {
            ConsistencyLevel::Moderate
        } else {
            ConsistencyLevel::Low
        }
    }
}

/// Outcome of the dispersion check for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStatus {
    Consistent,
    Inconsistent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryValidation {
    pub status: ClusterStatus,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub std_dev: f64,
    pub status: ConsistencyStatus,
    pub message: String,
    /// 100 at zero dispersion, falling to 0 at a dispersion of 1.5.
    pub consistency_index: Percentage,
    pub level: ConsistencyLevel,
    /// Deduplicated warnings from the pair and cluster checks.
    pub internal_inconsistencies: Vec<String>,
    /// Every category with at least two answers.
    pub category_details: BTreeMap<String, CategoryValidation>,
}

/// Spread of the four canonical role averages.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDispersion {
    pub averages: [f64; 4],
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl RoleDispersion {
    /// Builds from averages in `Role::ALL` order.
    pub fn from_averages(averages: [f64; 4]) -> Self {
        Self {
            averages,
            std_dev: std_dev(&averages),
            min: averages.iter().copied().fold(f64::INFINITY, f64::min),
            max: averages.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    fn roles(&self) -> impl Iterator<Item = (Role, f64)> + '_ {
        Role::ALL.into_iter().zip(self.averages)
    }

    fn count(&self, pred: impl Fn(f64) -> bool) -> usize {
        self.averages.iter().filter(|avg| pred(**avg)).count()
    }
}

type StatusRule = (fn(&RoleDispersion, &ScoringThresholds) -> bool, ConsistencyStatus);

/// Evaluated top to bottom, first match wins; `Balanced` when none match.
const STATUS_RULES: [StatusRule; 4] = [
    (is_contradictory, ConsistencyStatus::Contradictory),
    (is_fragmented, ConsistencyStatus::Fragmented),
    (is_imbalanced, ConsistencyStatus::Imbalanced),
    (is_consistent, ConsistencyStatus::Consistent),
];

/// A very high role alongside a very low foundational role.
fn is_contradictory(d: &RoleDispersion, t: &ScoringThresholds) -> bool {
    d.roles().any(|(high_role, high)| {
        high >= t.contradictory_high
            && d.roles().any(|(low_role, low)| {
                low_role != high_role && low_role.is_foundational() && low <= t.contradictory_low
            })
    })
}

fn is_fragmented(d: &RoleDispersion, t: &ScoringThresholds) -> bool {
    d.std_dev > t.fragmented_std_dev
        || d.count(|avg| avg < t.critical_role) >= t.critical_role_count
        || (d.max >= t.split_high && d.min <= t.split_low)
}

fn is_imbalanced(d: &RoleDispersion, t: &ScoringThresholds) -> bool {
    d.std_dev >= t.imbalanced_std_dev || d.max - d.min > t.imbalanced_spread
}

fn is_consistent(d: &RoleDispersion, t: &ScoringThresholds) -> bool {
    d.std_dev <= t.consistent_std_dev
        && d.min >= t.consistent_min_role
        && d.count(|avg| avg > t.strong_role) >= t.strong_role_count
}

/// Maps role dispersion to a status through the ordered rule cascade.
pub fn classify_roles(dispersion: &RoleDispersion, thresholds: &ScoringThresholds) -> ConsistencyStatus {
    STATUS_RULES
        .iter()
        .find(|(matches, _)| matches(dispersion, thresholds))
        .map(|(_, status)| *status)
        .unwrap_or(ConsistencyStatus::Balanced)
}

/// Compares each answered avoidant item with the mean of its answered
/// counterparts. Only questions take part.
pub fn check_contradiction_pairs(
    questions: &HashMap<u32, &Question>,
    answers: &AnswerMap,
    threshold: f64,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for (avoidant_id, active_ids) in CONTRADICTION_PAIRS.iter() {
        let Some(avoidant) = questions.get(avoidant_id) else {
            continue;
        };
        let Some(avoidant_value) = answers
            .question(*avoidant_id)
            .and_then(|a| resolved_value(avoidant, a))
        else {
            continue;
        };

        let counterparts: Vec<f64> = active_ids
            .iter()
            .filter_map(|id| {
                let question = questions.get(id)?;
                resolved_value(question, answers.question(*id)?)
            })
            .map(|v| v.as_f64())
            .collect();
        if counterparts.is_empty() {
            continue;
        }

        if (avoidant_value.as_f64() - mean(&counterparts)).abs() > threshold {
            let theme = avoidant
                .category_tags()
                .first()
                .map(String::as_str)
                .unwrap_or("Behavior");
            warnings.push(format!(
                "Inconsistency detected in {} (Q{}).",
                theme, avoidant_id
            ));
        }
    }

    warnings
}

/// Dispersion of answers inside each category with two or more answers.
pub fn check_category_clusters(
    categories: &BTreeMap<String, CategoryTally>,
    threshold: f64,
) -> (BTreeMap<String, CategoryValidation>, Vec<String>) {
    let mut details = BTreeMap::new();
    let mut warnings = Vec::new();

    for (name, category) in categories.iter().filter(|(_, c)| c.values.len() >= 2) {
        let sigma = std_dev(&category.values);
        let status = if sigma >= threshold {
            warnings.push(format!(
                "Inconsistent answers within {} (std dev {:.2}).",
                name, sigma
            ));
            ClusterStatus::Inconsistent
        } else {
            ClusterStatus::Consistent
        };
        details.insert(
            name.clone(),
            CategoryValidation {
                status,
                std_dev: round_to(sigma, 2),
            },
        );
    }

    (details, warnings)
}

/// Consistency index: `round((1 - σ / 1.5) * 100)` clamped to 0..=100.
pub fn consistency_index(std_dev: f64) -> Percentage {
    Percentage::from_f64((1.0 - std_dev / CONSISTENCY_INDEX_SPAN) * 100.0)
}

fn dedup_in_order(messages: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    messages
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

/// Runs all three checks and assembles the report.
pub fn validate(
    role_averages: [f64; 4],
    categories: &BTreeMap<String, CategoryTally>,
    questions: &HashMap<u32, &Question>,
    answers: &AnswerMap,
    thresholds: &ScoringThresholds,
) -> ConsistencyReport {
    let dispersion = RoleDispersion::from_averages(role_averages);
    let status = classify_roles(&dispersion, thresholds);

    let pair_warnings =
        check_contradiction_pairs(questions, answers, thresholds.contradiction_pair_gap);
    let (category_details, cluster_warnings) =
        check_category_clusters(categories, thresholds.category_cluster_std_dev);

    ConsistencyReport {
        std_dev: round_to(dispersion.std_dev, 2),
        status,
        message: status.message().to_string(),
        consistency_index: consistency_index(dispersion.std_dev),
        level: ConsistencyLevel::from_std_dev(dispersion.std_dev),
        internal_inconsistencies: dedup_in_order(pair_warnings.into_iter().chain(cluster_warnings)),
        category_details,
    }
}
