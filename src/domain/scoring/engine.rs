//! The scoring pass: normalize, aggregate, then analyze.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

use crate::domain::catalog::{AnswerMap, Dilemma, Question};
use crate::domain::foundation::{Axis, Horizon, Percentage, RespondentLevel};

use super::aggregator::{Aggregates, CategoryTally};
use super::consistency;
use super::cross_validation::cross_validate;
use super::horizon_fit::horizon_fit;
use super::matrix::Quadrant;
use super::normalizer::{normalize_dilemma, normalize_question, Normalized};
use super::omission;
use super::result::{
    BlockResult, DilemmaRecommendation, HorizonBreakdown, MatrixResult, RoleResult, ScoreResult,
};
use super::stats::{round_to, Tally};
use super::thresholds::ScoringThresholds;

/// Scores answer sets against a catalog. Holds only configuration, so one
/// engine can serve concurrent passes.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    thresholds: ScoringThresholds,
}

impl ScoringEngine {
    pub fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }

    /// Runs one pass. Items absent from `answers` are ignored; the catalog is
    /// expected to be filtered for `level` already.
    pub fn score(
        &self,
        questions: &[Question],
        dilemmas: &[Dilemma],
        answers: &AnswerMap,
        level: RespondentLevel,
    ) -> ScoreResult {
        let aggregates = aggregate(questions, dilemmas, answers, level);
        let total_items = questions.len() + dilemmas.len();

        debug!(
            level = %level,
            items = total_items,
            answered = answers.len(),
            omitted = aggregates.omissions.count,
            "Scoring assessment"
        );

        self.assemble(&aggregates, questions, dilemmas, answers, level, total_items)
    }

    fn assemble(
        &self,
        agg: &Aggregates,
        questions: &[Question],
        dilemmas: &[Dilemma],
        answers: &AnswerMap,
        level: RespondentLevel,
        total_items: usize,
    ) -> ScoreResult {
        let role_averages = agg.role_averages();
        let horizon_averages: HorizonBreakdown = agg.horizons.map(|t| t.mean());

        let by_id: HashMap<u32, &Question> = questions.iter().map(|q| (q.id, q)).collect();
        let consistency = consistency::validate(
            role_averages,
            &agg.categories,
            &by_id,
            answers,
            &self.thresholds,
        );

        let categories: BTreeMap<String, f64> = agg
            .categories
            .iter()
            .map(|(name, c)| (name.clone(), round_to(c.tally.mean(), 2)))
            .collect();

        ScoreResult {
            total: Percentage::of(agg.weighted_sum, agg.max_weighted_sum),
            matrix: matrix_result(
                agg.axis(Axis::People),
                agg.axis(Axis::Results),
                &self.thresholds,
            ),
            roles: agg
                .roles
                .iter()
                .map(|(role, tally)| {
                    let average = tally.overall.mean();
                    (
                        *role,
                        RoleResult {
                            score: round_to(average, 2),
                            horizons: tally.horizons.map(|t| round_to(t.mean(), 1)),
                            passed: reaches(average, self.thresholds.role_minimum(*role)),
                        },
                    )
                })
                .collect(),
            horizons: horizon_averages.map(|avg| round_to(avg, 1)),
            blocks: agg
                .blocks
                .iter()
                .map(|(name, block)| {
                    (
                        name.clone(),
                        BlockResult {
                            score: round_to(block.tally.mean(), 2),
                            horizon: block.dominant_horizon(),
                        },
                    )
                })
                .collect(),
            development_focus: development_focus(&agg.categories),
            categories,
            consistency,
            role_validation: cross_validate(&agg.roles, self.thresholds.cross_validation_gap),
            predominant_horizon: predominant_horizon(&horizon_averages),
            omission_analysis: omission::analyze(&agg.omissions, total_items),
            horizon_fit: horizon_fit(
                level,
                &horizon_averages,
                &role_averages,
                self.thresholds.horizon_fit_band,
            ),
            dilemma_recommendations: dilemma_recommendations(dilemmas, answers),
        }
    }
}

/// Scores with default thresholds.
pub fn score(
    questions: &[Question],
    dilemmas: &[Dilemma],
    answers: &AnswerMap,
    level: RespondentLevel,
) -> ScoreResult {
    ScoringEngine::default().score(questions, dilemmas, answers, level)
}

/// Single pass over the presented items in catalog order.
fn aggregate(
    questions: &[Question],
    dilemmas: &[Dilemma],
    answers: &AnswerMap,
    level: RespondentLevel,
) -> Aggregates {
    let mut agg = Aggregates::new();

    let question_items = questions.iter().filter_map(|q| {
        answers
            .question(q.id)
            .map(|a| (format!("Q{}", q.id), normalize_question(q, a, level)))
    });
    let dilemma_items = dilemmas.iter().filter_map(|d| {
        answers
            .dilemma(&d.id)
            .map(|a| (d.id.clone(), normalize_dilemma(d, a)))
    });

    for (item_id, normalized) in question_items.chain(dilemma_items) {
        match normalized {
            Normalized::Scored(item) => agg.add(&item),
            Normalized::Omitted(item) => {
                trace!(item = %item_id, "Item omitted");
                agg.record_omission(&item);
            }
        }
    }

    agg
}

/// An average on the 1-5 scale passes when its rounded percentage of 5
/// reaches `minimum`.
fn reaches(average: f64, minimum: u8) -> bool {
    Percentage::of(average, 5.0).value() >= minimum
}

fn matrix_result(people: &Tally, results: &Tally, thresholds: &ScoringThresholds) -> MatrixResult {
    let x = people.mean();
    let y = results.mean();
    let quadrant = Quadrant::classify(x, y);

    MatrixResult {
        x: round_to(x, 2),
        y: round_to(y, 2),
        quadrant: quadrant.number(),
        quadrant_name: quadrant.name().to_string(),
        people_percentage: Percentage::of(x, 5.0),
        results_percentage: Percentage::of(y, 5.0),
        people_passed: reaches(x, thresholds.axis_minimum(Axis::People)),
        results_passed: reaches(y, thresholds.axis_minimum(Axis::Results)),
    }
}

/// Highest global horizon average; ties go to the lowest horizon.
fn predominant_horizon(averages: &HorizonBreakdown) -> Horizon {
    Horizon::ALL
        .into_iter()
        .fold(Horizon::Immediate, |best, h| {
            if averages[h.index()] > averages[best.index()] {
                h
            } else {
                best
            }
        })
}

/// Lowest category average; ties go to the first name.
fn development_focus(categories: &BTreeMap<String, CategoryTally>) -> Option<String> {
    categories
        .iter()
        .fold(None, |best: Option<(&String, f64)>, (name, c)| {
            let avg = c.tally.mean();
            match best {
                Some((_, low)) if low <= avg => best,
                _ => Some((name, avg)),
            }
        })
        .map(|(name, _)| name.clone())
}

fn dilemma_recommendations(dilemmas: &[Dilemma], answers: &AnswerMap) -> Vec<DilemmaRecommendation> {
    dilemmas
        .iter()
        .filter(|d| {
            answers
                .dilemma(&d.id)
                .and_then(|a| a.value())
                .is_some_and(|v| v.value() == 1)
        })
        .filter_map(|d| {
            d.low_score_recommendation
                .as_ref()
                .map(|recommendation| DilemmaRecommendation {
                    dilemma_id: d.id.clone(),
                    title: d.title.clone(),
                    recommendation: recommendation.clone(),
                })
        })
        .collect()
}
