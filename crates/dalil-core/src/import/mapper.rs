//! Canonicalization of extracted field bags.
//!
//! Folds synonym source keys into canonical form-field names, applies
//! type-conditioned defaults, and backfills mandatory fields. Total:
//! missing source keys are skipped, producing a smaller map.

use crate::models::field::text_field;
use crate::models::{FieldMap, FieldValue, LegalTextKind};

/// Canonical key → accepted source aliases, tried in order.
const ALIASES: &[(&str, &[&str])] = &[
    ("numero_texte", &["reference", "numero"]),
    ("date_promulgation", &["date_journal", "publicationDate"]),
    ("date_signature", &["date_journal", "publicationDate"]),
    ("organisation", &["authority", "ministere"]),
    ("autorite_signataire", &["signataire"]),
    ("title", &["titre"]),
    ("content", &["contenu"]),
];

/// Ordered domain inference rules over the body text. First match wins;
/// the last entry doubles as the default.
pub const DOMAIN_RULES: &[(&[&str], &str)] = &[
    (&["commercial", "entreprise"], "Droit commercial"),
    (&["civil", "famille"], "Droit civil"),
    (&["pénal", "penal", "criminel"], "Droit pénal"),
    (&["fiscal", "impôt", "impot"], "Droit fiscal"),
    (&["administratif", "administration"], "Droit administratif"),
];

const DEFAULT_DOMAIN: &str = "Droit administratif";
const DEFAULT_STATUT: &str = "Publié";

/// Infer the legal domain from body keywords.
pub fn infer_domain(body: &str) -> &'static str {
    let lowered = body.to_lowercase();
    DOMAIN_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|&(_, domain)| domain)
        .unwrap_or(DEFAULT_DOMAIN)
}

/// Canonicalize a raw extraction bag for merge into the form draft.
pub fn map_fields(bag: &FieldMap, kind: LegalTextKind, body: &str) -> FieldMap {
    let alias_sources: Vec<&str> = ALIASES
        .iter()
        .flat_map(|(_, sources)| sources.iter().copied())
        .collect();

    // Pass-through: everything that is not a synonym source key is kept
    // as-is (canonical keys like article_1 or objet arrive here).
    let mut out = FieldMap::new();
    for (key, value) in bag {
        if !alias_sources.contains(&key.as_str()) {
            out.insert(key.clone(), value.clone());
        }
    }

    // Alias folding. A canonical key already present always wins over
    // its aliases, which keeps the mapping idempotent.
    for (canonical, sources) in ALIASES {
        if out.contains_key(*canonical) {
            continue;
        }
        if let Some(value) = sources.iter().find_map(|s| bag.get(*s)) {
            out.insert((*canonical).to_string(), value.clone());
        }
    }

    // Type-conditioned defaults. The detected kind is authoritative for
    // the type label.
    out.insert("type_texte".into(), kind.label().into());
    let niveau = publication_level(kind, &out);
    out.insert("niveau_publication".into(), niveau.into());

    // Mandatory-field backfill.
    out.entry("statut".into())
        .or_insert_with(|| DEFAULT_STATUT.into());
    out.entry("domaine_juridique".into())
        .or_insert_with(|| FieldValue::from(infer_domain(body)));

    out
}

fn publication_level(kind: LegalTextKind, fields: &FieldMap) -> &'static str {
    match kind {
        LegalTextKind::MinisterialOrder => {
            let has_ministry = text_field(fields, "organisation")
                .map(|v| !v.is_empty())
                .unwrap_or(false);
            if has_ministry { "Ministériel" } else { "Local" }
        }
        _ => "National",
    }
}
