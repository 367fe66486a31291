//! Typed application events.
//!
//! Cross-component signals (form opening, import completion) are plain
//! enum values delivered through an injected [`EventSink`], so the set of
//! events and their payloads is statically enumerable.

use crate::models::LegalTextKind;

/// Events emitted by the form binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The UI should switch to manual-input mode showing this template.
    FormOpened { kind: LegalTextKind },

    /// Mapped fields were merged into the draft.
    FieldsImported { kind: LegalTextKind, field_count: usize },

    /// Extraction was not available; the raw text was stored verbatim
    /// in the content field instead.
    ImportDegraded { reason: String },
}

/// Observer interface for application events.
pub trait EventSink {
    fn emit(&self, event: AppEvent);
}

/// Sink that drops every event. Useful for headless callers.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: AppEvent) {}
}

/// Sink that records events for inspection in tests.
#[derive(Default)]
pub struct RecordingSink {
    events: std::cell::RefCell<Vec<AppEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in emission order.
    pub fn events(&self) -> Vec<AppEvent> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: AppEvent) {
        self.events.borrow_mut().push(event);
    }
}
