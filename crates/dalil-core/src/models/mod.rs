//! Data models: field values, legal-text kinds, templates, drafts, config.

pub mod config;
pub mod draft;
pub mod field;
pub mod legal_text;
pub mod template;

pub use config::{DalilConfig, ImportConfig};
pub use draft::{DraftStore, FormDraft};
pub use field::{FieldMap, FieldValue};
pub use legal_text::LegalTextKind;
pub use template::{FieldDef, FormTemplate, InputKind, TemplateRegistry};
