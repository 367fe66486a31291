//! Rule-based field extractors for legal texts.

pub mod dates;
pub mod patterns;
pub mod reference;
pub mod sections;

pub use dates::{parse_french_date, DateJournalRule};
pub use reference::{MinistereRule, NumeroRule, SignataireRule};
pub use sections::{
    derive_summary, ArticleOneRule, FinalProvisionsRule, ObjetRule, RecitalsRule,
};

/// One extraction rule: a pattern that may contribute a single field.
///
/// A rule that does not match contributes no key, never an empty string,
/// so the downstream merge treats absence as "do not overwrite".
pub trait FieldRule {
    /// The canonical field name this rule produces.
    fn key(&self) -> &'static str;

    /// First match only; `None` when the pattern is absent.
    fn extract(&self, text: &str) -> Option<String>;
}
