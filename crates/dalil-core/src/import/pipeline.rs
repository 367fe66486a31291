//! OCR import pipeline: classify, extract, map.
//!
//! The pipeline runs synchronously in a single pass over whatever text
//! is available. Once built it is total: unknown structure yields the
//! default kind and an empty field set, never an error. The fallible
//! step is construction, where the rule set is compiled from
//! configuration; callers that must not fail use [`import_or_raw`].

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::ImportError;
use crate::models::{DalilConfig, FieldMap, ImportConfig, LegalTextKind};

use super::classifier;
use super::mapper;
use super::rules::{
    derive_summary, ArticleOneRule, DateJournalRule, FieldRule, FinalProvisionsRule,
    MinistereRule, NumeroRule, ObjetRule, RecitalsRule, SignataireRule,
};

/// Result of one import pass.
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Detected legal-text kind.
    pub kind: LegalTextKind,
    /// Canonicalized fields ready to merge into the draft.
    pub fields: FieldMap,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// The raw recognized text, kept for the manual-entry fallback.
    pub raw_text: String,
    /// True when extraction was unavailable and only the raw text was
    /// carried into the content field.
    pub degraded: bool,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based import pipeline for OCR'd legal texts.
pub struct ImportPipeline {
    rules: Vec<Box<dyn FieldRule + Send + Sync>>,
    config: ImportConfig,
}

impl ImportPipeline {
    /// Compile the rule set from configuration.
    pub fn new(config: &DalilConfig) -> Result<Self, ImportError> {
        let import = &config.import;
        let rules: Vec<Box<dyn FieldRule + Send + Sync>> = vec![
            Box::new(ArticleOneRule::new(import)?),
            Box::new(RecitalsRule::new(import)?),
            Box::new(FinalProvisionsRule::new(import)?),
            Box::new(ObjetRule),
            Box::new(NumeroRule),
            Box::new(DateJournalRule),
            Box::new(MinistereRule),
            Box::new(SignataireRule),
        ];

        Ok(Self {
            rules,
            config: import.clone(),
        })
    }

    /// Run the pipeline over raw text with an optional prior field bag.
    ///
    /// Prior fields feed classification (an explicit `type` wins) and
    /// the mapper's bag; freshly extracted keys shadow prior ones of the
    /// same name, everything else passes through.
    pub fn run(&self, text: &str, prior: Option<&FieldMap>) -> ImportResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("importing {} characters of recognized text", text.len());

        let title = prior_title(prior);
        let kind = classifier::classify_with_prior(title, text, prior);
        debug!("classified as {:?}", kind);

        let mut bag = prior.cloned().unwrap_or_default();
        let mut extracted = 0usize;
        for rule in &self.rules {
            if let Some(value) = rule.extract(text) {
                debug!("rule '{}' matched", rule.key());
                bag.insert(rule.key().to_string(), value.into());
                extracted += 1;
            }
        }

        // First-sentence summary, only when no explicit subject exists.
        if !bag.contains_key("objet") {
            if let Some(summary) = derive_summary(text, &self.config) {
                bag.insert("objet".into(), summary.into());
                extracted += 1;
            }
        }

        if extracted == 0 && !text.trim().is_empty() {
            warnings.push("no recognizable structure; fields left for manual entry".to_string());
        }
        if !bag.contains_key("numero") && !bag.contains_key("numero_texte") {
            warnings.push("could not extract text number".to_string());
        }

        let fields = mapper::map_fields(&bag, kind, text);

        debug!(
            "import produced {} fields ({} extracted) in {:?}",
            fields.len(),
            extracted,
            start.elapsed()
        );

        ImportResult {
            kind,
            fields,
            warnings,
            raw_text: text.to_string(),
            degraded: false,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

fn prior_title(prior: Option<&FieldMap>) -> &str {
    prior
        .and_then(|bag| crate::models::field::text_field(bag, "title"))
        .unwrap_or("")
}

/// Import with the raw-text fallback.
///
/// When the pipeline cannot be built, the form must still open: the raw
/// text is stored verbatim in the `content` field, no field-level
/// mapping is surfaced, and the result is marked degraded.
pub fn import_or_raw(config: &DalilConfig, text: &str, prior: Option<&FieldMap>) -> ImportResult {
    match ImportPipeline::new(config) {
        Ok(pipeline) => pipeline.run(text, prior),
        Err(e) => {
            warn!("extraction unavailable, storing raw text: {e}");
            let start = Instant::now();
            let kind = classifier::classify_with_prior(prior_title(prior), text, prior);

            let mut fields = prior.cloned().unwrap_or_default();
            fields.insert("content".into(), text.into());

            ImportResult {
                kind,
                fields,
                warnings: vec![format!("extraction unavailable: {e}")],
                raw_text: text.to_string(),
                degraded: true,
                processing_time_ms: start.elapsed().as_millis() as u64,
            }
        }
    }
}
