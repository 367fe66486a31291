//! Static form templates for the add-text workflow.
//!
//! Each legal-text kind has one template: an ordered list of field
//! definitions the UI renders as an editable form. Templates are
//! read-only static data; the registry never changes at runtime.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::legal_text::LegalTextKind;

/// Input widget kind for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single-line text input.
    Text,
    /// Multi-line text area.
    TextArea,
    /// Date picker.
    Date,
    /// Select from fixed options.
    Select,
}

/// Definition of one field in a form template.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    /// Canonical field name (the `FieldMap` key).
    pub name: &'static str,
    /// French display label.
    pub label: &'static str,
    /// Input widget kind.
    pub input: InputKind,
    /// Whether the field must be filled before submit.
    pub required: bool,
    /// Options for `Select` inputs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

impl FieldDef {
    const fn new(name: &'static str, label: &'static str, input: InputKind, required: bool) -> Self {
        Self {
            name,
            label,
            input,
            required,
            options: Vec::new(),
        }
    }

    fn select(
        name: &'static str,
        label: &'static str,
        required: bool,
        options: &[&'static str],
    ) -> Self {
        Self {
            name,
            label,
            input: InputKind::Select,
            required,
            options: options.to_vec(),
        }
    }
}

/// A static form schema for one legal-text kind.
#[derive(Debug, Clone, Serialize)]
pub struct FormTemplate {
    /// The kind this template renders.
    pub kind: LegalTextKind,
    /// Ordered field definitions.
    pub fields: Vec<FieldDef>,
}

impl FormTemplate {
    /// Look up a field definition by canonical name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all required fields.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

const PUBLICATION_LEVELS: &[&str] = &["National", "Ministériel", "Local"];
const STATUTS: &[&str] = &["Publié", "Abrogé", "En vigueur", "Suspendu"];
const DOMAINES: &[&str] = &[
    "Droit commercial",
    "Droit civil",
    "Droit pénal",
    "Droit fiscal",
    "Droit administratif",
];

/// Common fields shared by every legal-text template.
fn base_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", "Titre", InputKind::Text, true),
        FieldDef::new("numero_texte", "Numéro du texte", InputKind::Text, true),
        FieldDef::new("date_promulgation", "Date de promulgation", InputKind::Date, false),
        FieldDef::new("date_signature", "Date de signature", InputKind::Date, false),
        FieldDef::new("organisation", "Organisation émettrice", InputKind::Text, false),
        FieldDef::new("autorite_signataire", "Autorité signataire", InputKind::Text, false),
        FieldDef::select("type_texte", "Type de texte", true, &[]),
        FieldDef::select("niveau_publication", "Niveau de publication", false, PUBLICATION_LEVELS),
        FieldDef::select("statut", "Statut", true, STATUTS),
        FieldDef::select("domaine_juridique", "Domaine juridique", false, DOMAINES),
        FieldDef::new("objet", "Objet", InputKind::TextArea, false),
        FieldDef::new("article_1", "Article premier", InputKind::TextArea, false),
        FieldDef::new("considerants", "Considérants", InputKind::TextArea, false),
        FieldDef::new("dispositions_finales", "Dispositions finales", InputKind::TextArea, false),
        FieldDef::new("content", "Contenu", InputKind::TextArea, true),
    ]
}

fn template_for(kind: LegalTextKind) -> FormTemplate {
    let mut fields = base_fields();
    // The type selector of each template offers only its own label.
    if let Some(f) = fields.iter_mut().find(|f| f.name == "type_texte") {
        f.options = vec![kind.label()];
    }
    FormTemplate { kind, fields }
}

lazy_static! {
    static ref TEMPLATES: Vec<FormTemplate> = LegalTextKind::all()
        .iter()
        .map(|&kind| template_for(kind))
        .collect();
}

/// Read-only registry of form templates, one per legal-text kind.
pub struct TemplateRegistry;

impl TemplateRegistry {
    /// Exact-match lookup on the kind tag. No fuzzy matching.
    pub fn lookup(kind: LegalTextKind) -> Option<&'static FormTemplate> {
        TEMPLATES.iter().find(|t| t.kind == kind)
    }

    /// All registered templates, in classifier priority order.
    pub fn all() -> &'static [FormTemplate] {
        &TEMPLATES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_kind() {
        for &kind in LegalTextKind::all() {
            let template = TemplateRegistry::lookup(kind).expect("template missing");
            assert_eq!(template.kind, kind);
        }
    }

    #[test]
    fn lookup_is_exact() {
        let t = TemplateRegistry::lookup(LegalTextKind::ExecutiveDecree).unwrap();
        assert_eq!(t.kind, LegalTextKind::ExecutiveDecree);
        let options = &t.field("type_texte").unwrap().options;
        assert_eq!(options.as_slice(), &["Décret"]);
    }

    #[test]
    fn required_fields_include_title_and_content() {
        let t = TemplateRegistry::lookup(LegalTextKind::Law).unwrap();
        let required: Vec<_> = t.required_fields().collect();
        assert!(required.contains(&"title"));
        assert!(required.contains(&"content"));
        assert!(required.contains(&"numero_texte"));
    }

    #[test]
    fn field_lookup_by_name() {
        let t = TemplateRegistry::lookup(LegalTextKind::Circular).unwrap();
        assert_eq!(t.field("statut").unwrap().input, InputKind::Select);
        assert!(t.field("no_such_field").is_none());
    }
}
