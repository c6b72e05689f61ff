//! Forced-choice scenario dilemmas.

use serde::{Deserialize, Serialize};
use std::iter;

use crate::domain::foundation::{AxisTag, Horizon, LikertValue, Role};

/// One authored response to a dilemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DilemmaOption {
    pub text: String,
    /// 1 (low), 3 (medium) or 5 (high) maturity.
    pub value: LikertValue,
}

/// A situational item whose options already encode direction, so its values
/// are never inverted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dilemma {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub block: String,
    pub axis: AxisTag,
    #[serde(default)]
    pub category: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_role: Option<Role>,
    pub horizon: Horizon,
    #[serde(default)]
    pub options: Vec<DilemmaOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_score_recommendation: Option<String>,
}

impl Dilemma {
    /// Creates a dilemma with no options, secondary role or recommendation.
    pub fn new(
        id: impl Into<String>,
        axis: AxisTag,
        role: Role,
        horizon: Horizon,
        block: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            scenario: String::new(),
            block: block.into(),
            axis,
            category: category.into(),
            role,
            secondary_role: None,
            horizon,
            options: Vec::new(),
            low_score_recommendation: None,
        }
    }

    pub fn with_secondary_role(mut self, role: Role) -> Self {
        self.secondary_role = Some(role);
        self
    }

    pub fn with_option(mut self, text: impl Into<String>, value: LikertValue) -> Self {
        self.options.push(DilemmaOption {
            text: text.into(),
            value,
        });
        self
    }

    pub fn with_low_score_recommendation(mut self, text: impl Into<String>) -> Self {
        self.low_score_recommendation = Some(text.into());
        self
    }

    /// Roles this dilemma feeds: primary, then secondary when distinct.
    pub fn role_tags(&self) -> impl Iterator<Item = Role> + '_ {
        iter::once(self.role).chain(self.secondary_role.filter(|r| *r != self.role))
    }

    /// The dilemma's single category as a tag set (empty when unset).
    pub fn category_tags(&self) -> &[String] {
        if self.category.is_empty() {
            &[]
        } else {
            std::slice::from_ref(&self.category)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dilemma {
        Dilemma::new(
            "D1",
            AxisTag::Both,
            Role::Leader,
            Horizon::Expansion,
            "Ethics",
            "Ethical Decision Making",
        )
    }

    #[test]
    fn role_tags_include_secondary() {
        let d = sample().with_secondary_role(Role::Strategist);
        let roles: Vec<_> = d.role_tags().collect();
        assert_eq!(roles, vec![Role::Leader, Role::Strategist]);
    }

    #[test]
    fn role_tags_skip_duplicate_secondary() {
        let d = sample().with_secondary_role(Role::Leader);
        let roles: Vec<_> = d.role_tags().collect();
        assert_eq!(roles, vec![Role::Leader]);
    }

    #[test]
    fn empty_category_is_empty_tag_set() {
        let mut d = sample();
        d.category.clear();
        assert!(d.category_tags().is_empty());
    }

    #[test]
    fn dilemma_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "D2",
            "title": "Autonomia vs Controle",
            "scenario": "...",
            "block": "Desenvolvimento de Líderes",
            "axis": "Pessoas",
            "category": "Delegação & Empowerment",
            "role": "Gestor",
            "secondaryRole": "Líder",
            "horizon": 1,
            "options": [
                { "text": "Centralizo.", "value": 1 },
                { "text": "Acompanho.", "value": 3 },
                { "text": "Dou autonomia.", "value": 5 }
            ]
        }"#;

        let d: Dilemma = serde_json::from_str(json).unwrap();
        assert_eq!(d.role, Role::Manager);
        assert_eq!(d.secondary_role, Some(Role::Leader));
        assert_eq!(d.horizon, Horizon::Short);
        assert_eq!(d.options.len(), 3);
        assert_eq!(d.options[2].value, LikertValue::MAX);
    }
}
