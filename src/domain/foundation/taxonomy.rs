//! Behavioral axis and organizational role taxonomies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two behavioral axes of the 9-box matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[serde(alias = "Pessoas", alias = "People")]
    People,
    #[serde(alias = "Resultados", alias = "Results")]
    Results,
}

/// Axis tag carried by an item: a single axis or both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisTag {
    #[serde(alias = "Pessoas", alias = "People")]
    People,
    #[serde(alias = "Resultados", alias = "Results")]
    Results,
    #[serde(alias = "Ambos", alias = "Both")]
    Both,
}

impl AxisTag {
    /// Axes an item with this tag contributes to.
    pub fn axes(&self) -> &'static [Axis] {
        match self {
            AxisTag::People => &[Axis::People],
            AxisTag::Results => &[Axis::Results],
            AxisTag::Both => &[Axis::People, Axis::Results],
        }
    }
}

/// The four canonical leadership roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "Líder", alias = "Lider", alias = "Leader")]
    Leader,
    #[serde(alias = "Gestor", alias = "Manager")]
    Manager,
    #[serde(alias = "Estrategista", alias = "Strategist")]
    Strategist,
    #[serde(alias = "Intraempreendedor", alias = "Intrapreneur")]
    Intrapreneur,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 4] = [
        Role::Leader,
        Role::Manager,
        Role::Strategist,
        Role::Intrapreneur,
    ];

    /// Leader and Manager carry the day-to-day practice the other roles build on.
    pub fn is_foundational(&self) -> bool {
        matches!(self, Role::Leader | Role::Manager)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Leader => "Leader",
            Role::Manager => "Manager",
            Role::Strategist => "Strategist",
            Role::Intrapreneur => "Intrapreneur",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_tag_fans_out_to_two_axes() {
        assert_eq!(AxisTag::Both.axes(), &[Axis::People, Axis::Results]);
        assert_eq!(AxisTag::People.axes(), &[Axis::People]);
    }

    #[test]
    fn catalog_aliases_deserialize() {
        let tag: AxisTag = serde_json::from_str("\"Ambos\"").unwrap();
        assert_eq!(tag, AxisTag::Both);
        let role: Role = serde_json::from_str("\"Intraempreendedor\"").unwrap();
        assert_eq!(role, Role::Intrapreneur);
        let role: Role = serde_json::from_str("\"Líder\"").unwrap();
        assert_eq!(role, Role::Leader);
    }

    #[test]
    fn roles_serialize_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Strategist).unwrap(), "\"strategist\"");
    }

    #[test]
    fn only_leader_and_manager_are_foundational() {
        let foundational: Vec<_> = Role::ALL.iter().filter(|r| r.is_foundational()).collect();
        assert_eq!(foundational, vec![&Role::Leader, &Role::Manager]);
    }
}
