//! In-progress form state for one add-text session.

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

use super::field::{FieldMap, FieldValue};

/// Mutable key→value state of the form being filled.
///
/// Created when the user opens the add-text workflow, populated by manual
/// edits or by the import pipeline's mapped output, discarded on cancel,
/// and handed to a [`DraftStore`] on submit. Each session owns its draft
/// exclusively; there is no shared state between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDraft {
    values: FieldMap,
}

impl FormDraft {
    /// Empty draft for a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-seeded with existing values (e.g. reopening an edit).
    pub fn with_values(values: FieldMap) -> Self {
        Self { values }
    }

    /// Set a single field, as a manual user edit does.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Read a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Read a field as text.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(FieldValue::as_text)
    }

    /// Merge imported fields into the draft as a shallow spread.
    ///
    /// Only the keys present in `imported` are written; every other field
    /// already in the draft is left untouched. For keys present in both,
    /// the freshly imported value wins.
    pub fn merge_imported(&mut self, imported: &FieldMap) {
        for (key, value) in imported {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// All current values.
    pub fn values(&self) -> &FieldMap {
        &self.values
    }

    /// Number of filled fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the draft has no fields yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Hand the draft to the persistence boundary.
    pub fn submit(&self, store: &dyn DraftStore) -> Result<(), SubmitError> {
        store.submit(&self.values)
    }
}

/// External persistence boundary.
///
/// The wire format of the submit call belongs to the database
/// collaborator; this core only defines the contract.
pub trait DraftStore {
    /// Persist a validated field map. Success or error, nothing else.
    fn submit(&self, fields: &FieldMap) -> Result<(), SubmitError>;
}
