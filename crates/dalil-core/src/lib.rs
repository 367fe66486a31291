//! Core library for dalil legal-text management.
//!
//! This crate provides:
//! - Keyword classification of French legal texts (loi, décret, arrêté, ...)
//! - Rule-based field extraction from raw OCR text
//! - Canonical field mapping and form binding against static templates
//! - The draft/session model and the external persistence boundary

pub mod error;
pub mod events;
pub mod import;
pub mod models;

pub use error::{DalilError, ImportError, Result, SubmitError};
pub use events::{AppEvent, EventSink, NullSink, RecordingSink};
pub use import::{import_or_raw, FormBinder, ImportPipeline, ImportResult};
pub use models::{
    DalilConfig, DraftStore, FieldMap, FieldValue, FormDraft, FormTemplate, LegalTextKind,
    TemplateRegistry,
};
