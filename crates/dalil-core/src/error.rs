//! Error types for the dalil-core library.

use thiserror::Error;

/// Main error type for the dalil library.
#[derive(Error, Debug)]
pub enum DalilError {
    /// OCR import pipeline error.
    #[error("import error: {0}")]
    Import(#[from] ImportError),

    /// Draft submission error.
    #[error("submit error: {0}")]
    Submit(#[from] SubmitError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the OCR import pipeline.
///
/// The pipeline itself is total once built: classification and extraction
/// always produce a result, possibly a default or empty one. Errors can
/// only arise while assembling the rule set from configuration.
#[derive(Error, Debug)]
pub enum ImportError {
    /// A capture-window pattern failed to compile.
    #[error("failed to compile extraction rule '{rule}': {source}")]
    Rule {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    /// Configuration values describe an empty capture window.
    #[error("invalid capture window for '{rule}': min {min} > max {max}")]
    Window {
        rule: &'static str,
        min: usize,
        max: usize,
    },
}

/// Errors surfaced by the external persistence boundary.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The draft is missing a field the store requires.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The store rejected or failed to persist the draft.
    #[error("store error: {0}")]
    Store(String),

    /// I/O failure while persisting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the dalil library.
pub type Result<T> = std::result::Result<T, DalilError>;
