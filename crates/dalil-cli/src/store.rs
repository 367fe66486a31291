//! JSON-file implementation of the persistence boundary.

use std::path::PathBuf;

use dalil_core::models::FieldMap;
use dalil_core::{DraftStore, SubmitError};

/// Persists submitted drafts as pretty-printed JSON files.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DraftStore for JsonFileStore {
    fn submit(&self, fields: &FieldMap) -> Result<(), SubmitError> {
        if !fields.contains_key("content") {
            return Err(SubmitError::MissingField("content".to_string()));
        }

        let json = serde_json::to_string_pretty(fields)
            .map_err(|e| SubmitError::Store(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use dalil_core::FormDraft;

    use super::*;

    #[test]
    fn submit_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        let store = JsonFileStore::new(&path);

        let mut draft = FormDraft::new();
        draft.set("title", "Loi n° 90-11");
        draft.set("content", "corps du texte");
        draft.submit(&store).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let back: FieldMap = serde_json::from_str(&written).unwrap();
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn submit_requires_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("draft.json"));

        let mut draft = FormDraft::new();
        draft.set("title", "sans contenu");
        assert!(matches!(
            draft.submit(&store),
            Err(SubmitError::MissingField(_))
        ));
    }
}
