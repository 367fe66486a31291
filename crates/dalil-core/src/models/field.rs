//! Field value types shared across the form pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single form field value: plain text or a repeated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single string value.
    Text(String),
    /// A list value for repeated fields (e.g. keywords).
    List(Vec<String>),
}

impl FieldValue {
    /// The value as a single string, when it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Whether the value carries no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(v) => v.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

/// Canonical field name → value.
///
/// Keys are unique per form instance; ordering is irrelevant to the
/// pipeline, a BTreeMap just keeps serialized output stable.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Convenience lookup returning the text value for a key.
pub fn text_field<'a>(map: &'a FieldMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(FieldValue::as_text)
}
