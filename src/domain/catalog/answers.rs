//! Answer sets keyed by question id (numeric) or dilemma id (string).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{LikertValue, ValidationError};

/// A respondent's answer to one presented item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Value(LikertValue),
    /// Presented but skipped, typically because the item's time box ran out.
    Omitted,
}

impl Answer {
    /// The answered value, or `None` for an omission.
    pub fn value(&self) -> Option<LikertValue> {
        match self {
            Answer::Value(v) => Some(*v),
            Answer::Omitted => None,
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, Answer::Omitted)
    }
}

impl From<LikertValue> for Answer {
    fn from(value: LikertValue) -> Self {
        Answer::Value(value)
    }
}

/// Answers for one assessment.
///
/// Items absent from the map were never presented and are ignored by scoring.
/// Omissions are explicit entries, distinct from absence.
///
/// On the wire this is a flat object: numeric keys address questions, other
/// keys address dilemmas, and `null` marks an omission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Option<u8>>",
    into = "BTreeMap<String, Option<u8>>"
)]
pub struct AnswerMap {
    questions: BTreeMap<u32, Answer>,
    dilemmas: BTreeMap<String, Answer>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a question answer, replacing any previous one.
    pub fn answer_question(&mut self, id: u32, value: LikertValue) -> &mut Self {
        self.questions.insert(id, Answer::Value(value));
        self
    }

    /// Records that a question was presented but skipped.
    pub fn omit_question(&mut self, id: u32) -> &mut Self {
        self.questions.insert(id, Answer::Omitted);
        self
    }

    /// Records a dilemma answer, replacing any previous one.
    pub fn answer_dilemma(&mut self, id: impl Into<String>, value: LikertValue) -> &mut Self {
        self.dilemmas.insert(id.into(), Answer::Value(value));
        self
    }

    /// Records that a dilemma was presented but skipped.
    pub fn omit_dilemma(&mut self, id: impl Into<String>) -> &mut Self {
        self.dilemmas.insert(id.into(), Answer::Omitted);
        self
    }

    pub fn question(&self, id: u32) -> Option<Answer> {
        self.questions.get(&id).copied()
    }

    pub fn dilemma(&self, id: &str) -> Option<Answer> {
        self.dilemmas.get(id).copied()
    }

    /// Number of entries, omissions included.
    pub fn len(&self) -> usize {
        self.questions.len() + self.dilemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.dilemmas.is_empty()
    }

    /// Number of explicit omission markers.
    pub fn omitted_count(&self) -> usize {
        self.questions
            .values()
            .chain(self.dilemmas.values())
            .filter(|a| a.is_omitted())
            .count()
    }
}

fn parse_entry(key: &str, raw: Option<u8>) -> Result<Answer, ValidationError> {
    match raw {
        None => Ok(Answer::Omitted),
        Some(v) => LikertValue::try_new(v).map(Answer::Value).map_err(|_| {
            ValidationError::out_of_range(format!("answer '{}'", key), 1, 5, v as i32)
        }),
    }
}

impl TryFrom<BTreeMap<String, Option<u8>>> for AnswerMap {
    type Error = ValidationError;

    fn try_from(raw: BTreeMap<String, Option<u8>>) -> Result<Self, Self::Error> {
        let mut answers = AnswerMap::new();
        for (key, value) in raw {
            let key = key.trim().to_string();
            if key.is_empty() {
                return Err(ValidationError::empty_field("answer id"));
            }
            let answer = parse_entry(&key, value)?;
            match key.parse::<u32>() {
                Ok(id) => {
                    answers.questions.insert(id, answer);
                }
                Err(_) => {
                    answers.dilemmas.insert(key, answer);
                }
            }
        }
        Ok(answers)
    }
}

impl From<AnswerMap> for BTreeMap<String, Option<u8>> {
    fn from(answers: AnswerMap) -> Self {
        let questions = answers
            .questions
            .into_iter()
            .map(|(id, a)| (id.to_string(), a.value().map(u8::from)));
        let dilemmas = answers
            .dilemmas
            .into_iter()
            .map(|(id, a)| (id, a.value().map(u8::from)));
        questions.chain(dilemmas).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likert(v: u8) -> LikertValue {
        LikertValue::try_new(v).unwrap()
    }

    #[test]
    fn omission_is_distinct_from_absence() {
        let mut answers = AnswerMap::new();
        answers.omit_question(10);

        assert_eq!(answers.question(10), Some(Answer::Omitted));
        assert_eq!(answers.question(11), None);
        assert_eq!(answers.omitted_count(), 1);
    }

    #[test]
    fn deserializes_numeric_keys_as_questions() {
        let answers: AnswerMap =
            serde_json::from_str(r#"{"1": 4, "22": null, "D1": 5, "D2": null}"#).unwrap();

        assert_eq!(answers.question(1), Some(Answer::Value(likert(4))));
        assert_eq!(answers.question(22), Some(Answer::Omitted));
        assert_eq!(answers.dilemma("D1"), Some(Answer::Value(likert(5))));
        assert_eq!(answers.dilemma("D2"), Some(Answer::Omitted));
        assert_eq!(answers.len(), 4);
    }

    #[test]
    fn rejects_out_of_scale_values() {
        let result = serde_json::from_str::<AnswerMap>(r#"{"1": 6}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_keys() {
        let raw: BTreeMap<String, Option<u8>> = [(" ".to_string(), Some(3))].into_iter().collect();
        assert_eq!(
            AnswerMap::try_from(raw),
            Err(ValidationError::empty_field("answer id"))
        );
    }

    #[test]
    fn serializes_to_flat_object() {
        let mut answers = AnswerMap::new();
        answers.answer_question(3, likert(2)).omit_dilemma("D4");

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json, serde_json::json!({"3": 2, "D4": null}));
    }
}
