//! Form binder: template lookup plus draft merge.
//!
//! The boundary into UI state management. The binder switches the active
//! form to the template matching the detected kind, merges the mapped
//! fields into the draft as a shallow spread, and signals the UI through
//! typed events.

use tracing::debug;

use crate::events::{AppEvent, EventSink};
use crate::models::{FormDraft, FormTemplate, TemplateRegistry};

use super::pipeline::ImportResult;

/// Outcome of binding an import result to a form.
pub struct BindOutcome {
    /// The matched template, `None` when the registry has no entry for
    /// the detected kind.
    pub template: Option<&'static FormTemplate>,
    /// Number of fields merged into the draft.
    pub merged: usize,
}

/// Binds import results into form drafts.
pub struct FormBinder<'a> {
    sink: &'a dyn EventSink,
}

impl<'a> FormBinder<'a> {
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Self { sink }
    }

    /// Merge the result's fields into the draft and open the matching
    /// form. New keys override; fields not present in the mapped output
    /// are left untouched.
    pub fn bind(&self, result: &ImportResult, draft: &mut FormDraft) -> BindOutcome {
        let template = TemplateRegistry::lookup(result.kind);
        debug!(
            "binding {} fields to {:?} form (template: {})",
            result.fields.len(),
            result.kind,
            template.is_some()
        );

        self.sink.emit(AppEvent::FormOpened { kind: result.kind });

        draft.merge_imported(&result.fields);

        if result.degraded {
            self.sink.emit(AppEvent::ImportDegraded {
                reason: result.warnings.join("; "),
            });
        } else {
            self.sink.emit(AppEvent::FieldsImported {
                kind: result.kind,
                field_count: result.fields.len(),
            });
        }

        BindOutcome {
            template,
            merged: result.fields.len(),
        }
    }
}
