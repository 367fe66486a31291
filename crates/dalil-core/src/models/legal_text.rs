//! Legal text classification types.

use serde::{Deserialize, Serialize};

/// Classification of an Algerian legal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalTextKind {
    /// Loi.
    Law,
    /// Décret exécutif.
    ExecutiveDecree,
    /// Arrêté ministériel.
    MinisterialOrder,
    /// Ordonnance.
    Ordinance,
    /// Circulaire.
    Circular,
    /// Instruction.
    Instruction,
}

impl Default for LegalTextKind {
    fn default() -> Self {
        Self::Law
    }
}

impl LegalTextKind {
    /// French display label, as shown in the form's `type_texte` field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Law => "Loi",
            Self::ExecutiveDecree => "Décret",
            Self::MinisterialOrder => "Arrêté",
            Self::Ordinance => "Ordonnance",
            Self::Circular => "Circulaire",
            Self::Instruction => "Instruction",
        }
    }

    /// Stable identifier used by the template registry and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Law => "law",
            Self::ExecutiveDecree => "executive_decree",
            Self::MinisterialOrder => "ministerial_order",
            Self::Ordinance => "ordinance",
            Self::Circular => "circular",
            Self::Instruction => "instruction",
        }
    }

    /// Parse a kind from a free-form value, e.g. a `type` field carried
    /// over from a previous form session.
    ///
    /// Accepts the snake_case identifiers, the French labels, and the
    /// hyphenated source names (decret-executif, arrete-ministeriel).
    /// Returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_lowercase();
        match v.as_str() {
            "law" | "loi" => Some(Self::Law),
            "executive_decree" | "decret-executif" | "décret-exécutif" | "décret" | "decret" => {
                Some(Self::ExecutiveDecree)
            }
            "ministerial_order" | "arrete-ministeriel" | "arrêté-ministériel" | "arrêté"
            | "arrete" => Some(Self::MinisterialOrder),
            "ordinance" | "ordonnance" => Some(Self::Ordinance),
            "circular" | "circulaire" => Some(Self::Circular),
            "instruction" => Some(Self::Instruction),
            _ => None,
        }
    }

    /// All kinds, in classifier priority order.
    pub fn all() -> &'static [LegalTextKind] {
        &[
            Self::ExecutiveDecree,
            Self::MinisterialOrder,
            Self::Law,
            Self::Ordinance,
            Self::Circular,
            Self::Instruction,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_law() {
        assert_eq!(LegalTextKind::default(), LegalTextKind::Law);
    }

    #[test]
    fn parse_accepts_french_and_snake_case() {
        assert_eq!(LegalTextKind::parse("Loi"), Some(LegalTextKind::Law));
        assert_eq!(
            LegalTextKind::parse("decret-executif"),
            Some(LegalTextKind::ExecutiveDecree)
        );
        assert_eq!(
            LegalTextKind::parse("ministerial_order"),
            Some(LegalTextKind::MinisterialOrder)
        );
        assert_eq!(LegalTextKind::parse("  Ordonnance "), Some(LegalTextKind::Ordinance));
        assert_eq!(LegalTextKind::parse("décision"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&LegalTextKind::ExecutiveDecree).unwrap();
        assert_eq!(json, r#""executive_decree""#);
        let back: LegalTextKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LegalTextKind::ExecutiveDecree);
    }

    #[test]
    fn labels_match_form_values() {
        assert_eq!(LegalTextKind::ExecutiveDecree.label(), "Décret");
        assert_eq!(LegalTextKind::MinisterialOrder.label(), "Arrêté");
        assert_eq!(LegalTextKind::Law.label(), "Loi");
    }
}
