//! OCR-to-form import: classification, extraction, mapping, binding.

pub mod binder;
pub mod classifier;
pub mod mapper;
pub mod pipeline;
pub mod rules;

pub use binder::{BindOutcome, FormBinder};
pub use classifier::{classify, classify_with_prior};
pub use mapper::{infer_domain, map_fields};
pub use pipeline::{import_or_raw, ImportPipeline, ImportResult};
