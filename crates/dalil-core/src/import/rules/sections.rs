//! Section extraction: first article, recitals, final provisions, subject.

use regex::Regex;

use crate::error::ImportError;
use crate::models::ImportConfig;

use super::patterns;
use super::FieldRule;

/// Extracts the text following "Article premier :".
pub struct ArticleOneRule {
    re: Regex,
}

impl ArticleOneRule {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        Ok(Self {
            re: patterns::article_one(config.article_min, config.article_max)?,
        })
    }
}

impl FieldRule for ArticleOneRule {
    fn key(&self) -> &'static str {
        "article_1"
    }

    fn extract(&self, text: &str) -> Option<String> {
        self.re
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// Extracts the recital text following "considérant que".
pub struct RecitalsRule {
    re: Regex,
}

impl RecitalsRule {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        Ok(Self {
            re: patterns::recitals(config.recital_min, config.recital_max)?,
        })
    }
}

impl FieldRule for RecitalsRule {
    fn key(&self) -> &'static str {
        "considerants"
    }

    fn extract(&self, text: &str) -> Option<String> {
        self.re
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// Extracts the closing provisions ("dispositions finales" / "article final").
pub struct FinalProvisionsRule {
    re: Regex,
}

impl FinalProvisionsRule {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        Ok(Self {
            re: patterns::final_provisions(config.final_min, config.final_max)?,
        })
    }
}

impl FieldRule for FinalProvisionsRule {
    fn key(&self) -> &'static str {
        "dispositions_finales"
    }

    fn extract(&self, text: &str) -> Option<String> {
        self.re
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// Extracts an explicitly labeled subject line ("Objet : ...").
pub struct ObjetRule;

impl FieldRule for ObjetRule {
    fn key(&self) -> &'static str {
        "objet"
    }

    fn extract(&self, text: &str) -> Option<String> {
        patterns::OBJET_LABEL
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// Derive a summary from the first sentence of the body.
///
/// Applies only when no explicit subject exists: the body must exceed the
/// configured threshold, and the text up to the first period is accepted
/// only when its length falls inside the summary window. Anything else
/// yields no summary at all.
pub fn derive_summary(text: &str, config: &ImportConfig) -> Option<String> {
    if text.chars().count() <= config.summary_body_threshold {
        return None;
    }

    let first_sentence = text.split('.').next()?.trim();
    let len = first_sentence.chars().count();
    if len >= config.summary_min && len <= config.summary_max {
        Some(first_sentence.to_string())
    } else {
        None
    }
}
