//! Catalog module - inert reference data the scoring engine consumes.
//!
//! Questions and dilemmas are authored content; the engine reads their tags
//! but never their text. Answer sets map item ids to values or omissions.

mod answers;
mod dilemma;
mod question;

pub use answers::{Answer, AnswerMap};
pub use dilemma::{Dilemma, DilemmaOption};
pub use question::Question;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RespondentLevel;

/// The questions and dilemmas presented in one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub dilemmas: Vec<Dilemma>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>, dilemmas: Vec<Dilemma>) -> Self {
        Self {
            questions,
            dilemmas,
        }
    }

    /// Keeps the common questions plus those authored for `level`.
    /// Dilemmas apply to every level.
    pub fn for_level(&self, level: RespondentLevel) -> Catalog {
        Catalog {
            questions: self
                .questions
                .iter()
                .filter(|q| q.applies_to(level))
                .cloned()
                .collect(),
            dilemmas: self.dilemmas.clone(),
        }
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn dilemma(&self, id: &str) -> Option<&Dilemma> {
        self.dilemmas.iter().find(|d| d.id == id)
    }

    /// Total presented items (questions plus dilemmas).
    pub fn item_count(&self) -> usize {
        self.questions.len() + self.dilemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}
