//! Leadership level of the respondent and applicability level of items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Declared leadership scope of the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RespondentLevel {
    /// Leader of self.
    L1,
    /// Leader of others.
    L2,
    /// Leader of leaders.
    L3,
    /// Organizational leader.
    L4,
}

impl RespondentLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RespondentLevel::L1 => "Leader of Self",
            RespondentLevel::L2 => "Leader of Others",
            RespondentLevel::L3 => "Leader of Leaders",
            RespondentLevel::L4 => "Organizational Leader",
        }
    }
}

impl fmt::Display for RespondentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            RespondentLevel::L1 => "L1",
            RespondentLevel::L2 => "L2",
            RespondentLevel::L3 => "L3",
            RespondentLevel::L4 => "L4",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for RespondentLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L1" => Ok(RespondentLevel::L1),
            "L2" => Ok(RespondentLevel::L2),
            "L3" => Ok(RespondentLevel::L3),
            "L4" => Ok(RespondentLevel::L4),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("expected L1-L4, got '{}'", other),
            )),
        }
    }
}

/// Level a question was authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuestionLevel {
    /// Applies to every respondent.
    #[default]
    #[serde(alias = "Comum")]
    Common,
    L1,
    L2,
    L3,
    L4,
}

impl QuestionLevel {
    /// Returns true if a respondent at `level` should be presented this question.
    pub fn applies_to(&self, level: RespondentLevel) -> bool {
        match self {
            QuestionLevel::Common => true,
            QuestionLevel::L1 => level == RespondentLevel::L1,
            QuestionLevel::L2 => level == RespondentLevel::L2,
            QuestionLevel::L3 => level == RespondentLevel::L3,
            QuestionLevel::L4 => level == RespondentLevel::L4,
        }
    }
}
