//! Keyword classification of legal texts.
//!
//! An ordered decision list of (keywords, kind) pairs evaluated in
//! sequence over the lower-cased title + body. The ordering is a fixed
//! priority tie-break, not a scored decision: a text mentioning both
//! "décret" and "loi" classifies as a decree because decree is checked
//! first.

use crate::models::field::text_field;
use crate::models::{FieldMap, LegalTextKind};

/// The decision list, in priority order. Each entry lists the accented
/// keyword plus its accent-stripped OCR variant.
pub const RULES: &[(&[&str], LegalTextKind)] = &[
    (&["décret", "decret"], LegalTextKind::ExecutiveDecree),
    (&["arrêté", "arrete"], LegalTextKind::MinisterialOrder),
    (&["loi"], LegalTextKind::Law),
    (&["ordonnance"], LegalTextKind::Ordinance),
    (&["circulaire"], LegalTextKind::Circular),
    (&["instruction"], LegalTextKind::Instruction),
];

/// Classify a text by keyword presence. First rule that matches wins;
/// no match falls back to [`LegalTextKind::Law`]. Pure and total.
pub fn classify(text: &str) -> LegalTextKind {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|&(_, kind)| kind)
        .unwrap_or_default()
}

/// Classify with an optional prior field bag.
///
/// A `type` field already present in the bag takes precedence when it
/// parses to a known kind; an unrecognized value is ignored and keyword
/// classification proceeds over title + body.
pub fn classify_with_prior(
    title: &str,
    body: &str,
    prior: Option<&FieldMap>,
) -> LegalTextKind {
    if let Some(kind) = prior
        .and_then(|bag| text_field(bag, "type"))
        .and_then(LegalTextKind::parse)
    {
        return kind;
    }

    classify(&format!("{title} {body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_deterministic() {
        let text = "Arrêté ministériel portant nomination";
        assert_eq!(classify(text), classify(text));
        assert_eq!(classify(text), LegalTextKind::MinisterialOrder);
    }

    #[test]
    fn decree_beats_law() {
        // Both keywords present; decree is checked first.
        assert_eq!(
            classify("Décret exécutif modifiant la loi de finances"),
            LegalTextKind::ExecutiveDecree
        );
    }

    #[test]
    fn empty_input_defaults_to_law() {
        assert_eq!(classify(""), LegalTextKind::Law);
    }

    #[test]
    fn no_keyword_defaults_to_law() {
        assert_eq!(
            classify("Texte sans mot-clé reconnu"),
            LegalTextKind::Law
        );
    }

    #[test]
    fn keyword_in_title_or_body_both_trigger() {
        assert_eq!(
            classify_with_prior("Ordonnance n° 95-07", "corps du texte", None),
            LegalTextKind::Ordinance
        );
        assert_eq!(
            classify_with_prior("Titre neutre", "la présente circulaire précise", None),
            LegalTextKind::Circular
        );
    }

    #[test]
    fn unaccented_ocr_variant_matches() {
        assert_eq!(classify("decret executif n 12-34"), LegalTextKind::ExecutiveDecree);
        assert_eq!(classify("arrete du wali"), LegalTextKind::MinisterialOrder);
    }

    #[test]
    fn explicit_prior_type_wins() {
        let mut bag = FieldMap::new();
        bag.insert("type".into(), "circulaire".into());
        assert_eq!(
            classify_with_prior("Décret exécutif", "texte", Some(&bag)),
            LegalTextKind::Circular
        );
    }

    #[test]
    fn unparseable_prior_type_is_ignored() {
        let mut bag = FieldMap::new();
        bag.insert("type".into(), "décision".into());
        assert_eq!(
            classify_with_prior("Décret exécutif", "texte", Some(&bag)),
            LegalTextKind::ExecutiveDecree
        );
    }

    #[test]
    fn every_rule_is_reachable() {
        for &(keywords, kind) in RULES {
            assert_eq!(classify(keywords[0]), kind);
        }
    }
}
