//! Likert questions and their taxonomy tags.

use serde::{Deserialize, Serialize};
use std::slice;

use crate::domain::foundation::{AxisTag, Horizon, QuestionLevel, RespondentLevel, Role};

/// A declarative Likert item.
///
/// Questions may be authored with single legacy tags (`category`, `role`,
/// `horizon`) or with tag sets (`categories`, `roles`, `horizons`). A tag set,
/// when present, supersedes the legacy tag, even if it is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub level: QuestionLevel,
    #[serde(default)]
    pub inverted: bool,
    pub axis: AxisTag,
    #[serde(default)]
    pub block: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<Horizon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizons: Option<Vec<Horizon>>,
}

impl Question {
    /// Creates an untagged common-level question.
    pub fn new(id: u32, axis: AxisTag, block: impl Into<String>) -> Self {
        Self {
            id,
            text: String::new(),
            level: QuestionLevel::Common,
            inverted: false,
            axis,
            block: block.into(),
            category: None,
            role: None,
            horizon: None,
            categories: None,
            roles: None,
            horizons: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_level(mut self, level: QuestionLevel) -> Self {
        self.level = level;
        self
    }

    /// Marks the question as reverse-scored.
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = Some(horizon);
        self
    }

    pub fn with_categories(mut self, categories: Vec<impl Into<String>>) -> Self {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn with_horizons(mut self, horizons: Vec<Horizon>) -> Self {
        self.horizons = Some(horizons);
        self
    }

    /// Effective category tag set.
    pub fn category_tags(&self) -> &[String] {
        tag_set(&self.categories, &self.category)
    }

    /// Effective role tag set.
    pub fn role_tags(&self) -> &[Role] {
        tag_set(&self.roles, &self.role)
    }

    /// Effective horizon tag set.
    pub fn horizon_tags(&self) -> &[Horizon] {
        tag_set(&self.horizons, &self.horizon)
    }

    /// Returns true if a respondent at `level` should be presented this question.
    pub fn applies_to(&self, level: RespondentLevel) -> bool {
        self.level.applies_to(level)
    }
}

fn tag_set<'a, T>(set: &'a Option<Vec<T>>, single: &'a Option<T>) -> &'a [T] {
    match (set, single) {
        (Some(set), _) => set.as_slice(),
        (None, Some(one)) => slice::from_ref(one),
        (None, None) => &[],
    }
}
