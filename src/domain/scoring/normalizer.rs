//! Resolves raw answers into scored or omitted items over tag-set shapes.

use crate::domain::catalog::{Answer, Dilemma, Question};
use crate::domain::foundation::{AxisTag, Horizon, LikertValue, RespondentLevel, Role};

use super::weighting::{question_weight, DILEMMA_WEIGHT};

/// An answered item ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<'a> {
    /// Value after inversion, on the 1-5 scale.
    pub value: LikertValue,
    /// Headline-score weight.
    pub weight: f64,
    pub axis: AxisTag,
    /// Tag sets with repeats removed, in catalog order.
    pub roles: Vec<Role>,
    pub horizons: Vec<Horizon>,
    pub categories: Vec<&'a str>,
    pub block: &'a str,
    /// True for dilemma answers, which also feed role cross-validation.
    pub situational: bool,
}

/// A presented item the respondent skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmittedItem<'a> {
    pub categories: Vec<&'a str>,
}

/// Outcome of normalizing one answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<'a> {
    Scored(ScoredItem<'a>),
    Omitted(OmittedItem<'a>),
}

/// Normalizes a question answer: applies inversion and its level weight.
pub fn normalize_question<'a>(
    question: &'a Question,
    answer: Answer,
    level: RespondentLevel,
) -> Normalized<'a> {
    let categories = distinct(question.category_tags().iter().map(String::as_str));
    let raw = match answer {
        Answer::Omitted => return Normalized::Omitted(OmittedItem { categories }),
        Answer::Value(v) => v,
    };
    let value = if question.inverted { raw.inverted() } else { raw };
    let horizons = distinct(question.horizon_tags().iter().copied());

    Normalized::Scored(ScoredItem {
        value,
        weight: question_weight(level, &horizons),
        axis: question.axis,
        roles: distinct(question.role_tags().iter().copied()),
        horizons,
        categories,
        block: &question.block,
        situational: false,
    })
}

/// Normalizes a dilemma answer. Dilemma values are never inverted.
pub fn normalize_dilemma(dilemma: &Dilemma, answer: Answer) -> Normalized<'_> {
    let categories = distinct(dilemma.category_tags().iter().map(String::as_str));
    let value = match answer {
        Answer::Omitted => return Normalized::Omitted(OmittedItem { categories }),
        Answer::Value(v) => v,
    };

    Normalized::Scored(ScoredItem {
        value,
        weight: DILEMMA_WEIGHT,
        axis: dilemma.axis,
        roles: dilemma.role_tags().collect(),
        horizons: vec![dilemma.horizon],
        categories,
        block: &dilemma.block,
        situational: true,
    })
}

/// Keeps the first occurrence of each tag.
fn distinct<T: PartialEq>(tags: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut unique = Vec::new();
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

/// The value a question answer resolves to after inversion, if answered.
pub fn resolved_value(question: &Question, answer: Answer) -> Option<LikertValue> {
    answer
        .value()
        .map(|v| if question.inverted { v.inverted() } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likert(v: u8) -> LikertValue {
        LikertValue::try_new(v).unwrap()
    }

    fn question() -> Question {
        Question::new(10, AxisTag::People, "People")
            .with_category("Conflict")
            .with_role(Role::Leader)
            .with_horizon(Horizon::Immediate)
    }

    #[test]
    fn inverted_question_reflects_value() {
        let q = question().inverted();
        match normalize_question(&q, Answer::Value(likert(2)), RespondentLevel::L4) {
            Normalized::Scored(item) => assert_eq!(item.value, likert(4)),
            other => panic!("expected scored item, got {:?}", other),
        }
    }

    #[test]
    fn omitted_question_routes_to_omission() {
        let q = question();
        match normalize_question(&q, Answer::Omitted, RespondentLevel::L1) {
            Normalized::Omitted(item) => assert_eq!(item.categories, vec!["Conflict"]),
            other => panic!("expected omission, got {:?}", other),
        }
    }

    #[test]
    fn question_weight_follows_level() {
        let q = question();
        match normalize_question(&q, Answer::Value(likert(3)), RespondentLevel::L1) {
            Normalized::Scored(item) => {
                assert_eq!(item.weight, 1.5);
                assert!(!item.situational);
            }
            other => panic!("expected scored item, got {:?}", other),
        }
    }

    #[test]
    fn dilemma_is_never_inverted_and_weighs_one() {
        let d = Dilemma::new("D3", AxisTag::Results, Role::Strategist, Horizon::Long, "Execution", "Performance")
            .with_secondary_role(Role::Manager);
        match normalize_dilemma(&d, Answer::Value(likert(1))) {
            Normalized::Scored(item) => {
                assert_eq!(item.value, likert(1));
                assert_eq!(item.weight, 1.0);
                assert_eq!(item.roles, vec![Role::Strategist, Role::Manager]);
                assert_eq!(item.horizons, vec![Horizon::Long]);
                assert!(item.situational);
            }
            other => panic!("expected scored item, got {:?}", other),
        }
    }

    #[test]
    fn resolved_value_applies_inversion() {
        let q = question().inverted();
        assert_eq!(resolved_value(&q, Answer::Value(likert(5))), Some(likert(1)));
        assert_eq!(resolved_value(&q, Answer::Omitted), None);
    }

    #[test]
    fn repeated_tags_collapse_in_order() {
        let q = Question::new(11, AxisTag::People, "People")
            .with_roles(vec![Role::Manager, Role::Leader, Role::Manager])
            .with_horizons(vec![Horizon::Long, Horizon::Short, Horizon::Long])
            .with_categories(vec!["Feedback", "Conflict", "Feedback"]);

        match normalize_question(&q, Answer::Value(likert(4)), RespondentLevel::L2) {
            Normalized::Scored(item) => {
                assert_eq!(item.roles, vec![Role::Manager, Role::Leader]);
                assert_eq!(item.horizons, vec![Horizon::Long, Horizon::Short]);
                assert_eq!(item.categories, vec!["Feedback", "Conflict"]);
            }
            other => panic!("expected scored item, got {:?}", other),
        }
        match normalize_question(&q, Answer::Omitted, RespondentLevel::L2) {
            Normalized::Omitted(item) => assert_eq!(item.categories, vec!["Feedback", "Conflict"]),
            other => panic!("expected omission, got {:?}", other),
        }
    }
}
