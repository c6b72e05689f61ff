//! Decision readiness from time-boxed skips.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::aggregator::OmissionTally;
use super::stats::round_to;

const MAX_IMPACTED_CATEGORIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmissionReport {
    pub count: u32,
    /// Share of presented items that were skipped, to one decimal.
    pub percentage: f64,
    pub readiness_index: Percentage,
    /// Up to three categories, most skipped first.
    pub main_impacted_categories: Vec<String>,
    pub interpretation: String,
}

/// Builds the report against `total_items`, the number of questions and
/// dilemmas supplied to the pass.
pub fn analyze(omissions: &OmissionTally, total_items: usize) -> OmissionReport {
    let count = omissions.count;
    let ratio = if total_items == 0 {
        0.0
    } else {
        f64::from(count) / total_items as f64
    };

    let main_impacted_categories = impacted_categories(omissions);
    let interpretation = interpret(count, &main_impacted_categories);

    OmissionReport {
        count,
        percentage: round_to(ratio * 100.0, 1),
        readiness_index: Percentage::from_f64(100.0 - 100.0 * ratio),
        main_impacted_categories,
        interpretation,
    }
}

fn impacted_categories(omissions: &OmissionTally) -> Vec<String> {
    let mut ranked: Vec<(&String, u32)> = omissions
        .by_category
        .iter()
        .filter(|(_, n)| **n > 0)
        .map(|(name, n)| (name, *n))
        .collect();
    // by_category iterates in name order, so a stable sort keeps ties by name.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_IMPACTED_CATEGORIES)
        .map(|(name, _)| name.clone())
        .collect()
}

fn interpret(count: u32, impacted: &[String]) -> String {
    if count == 0 {
        return "You answered every item within the time limit, which indicates strong \
                decision readiness under pressure."
            .to_string();
    }
    if impacted.is_empty() {
        return "Your skipped items are dispersed, suggesting occasional hesitation \
                rather than a concentrated pattern."
            .to_string();
    }
    format!(
        "Your hesitation concentrates on {}. These themes may call for faster \
         decision criteria.",
        join_names(impacted)
    )
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
