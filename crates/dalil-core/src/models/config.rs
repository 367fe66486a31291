//! Configuration structures for the import pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for dalil.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DalilConfig {
    /// OCR import pipeline configuration.
    pub import: ImportConfig,
}

/// Capture windows and thresholds for the field extraction rules.
///
/// The windows bound how much text a section pattern may capture after
/// its introductory phrase. They feed directly into the compiled rule
/// set, so a misconfigured window surfaces at pipeline construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Minimum capture length after "Article premier :".
    pub article_min: usize,

    /// Maximum capture length after "Article premier :".
    pub article_max: usize,

    /// Minimum capture length after "considérant que".
    pub recital_min: usize,

    /// Maximum capture length after "considérant que".
    pub recital_max: usize,

    /// Minimum capture length after "dispositions finales".
    pub final_min: usize,

    /// Maximum capture length after "dispositions finales".
    pub final_max: usize,

    /// Body length below which no summary is derived.
    pub summary_body_threshold: usize,

    /// Shortest acceptable derived summary.
    pub summary_min: usize,

    /// Longest acceptable derived summary.
    pub summary_max: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            article_min: 50,
            article_max: 300,
            recital_min: 50,
            recital_max: 200,
            final_min: 30,
            final_max: 200,
            summary_body_threshold: 100,
            summary_min: 20,
            summary_max: 200,
        }
    }
}

impl DalilConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capture_windows() {
        let cfg = ImportConfig::default();
        assert_eq!((cfg.article_min, cfg.article_max), (50, 300));
        assert_eq!((cfg.recital_min, cfg.recital_max), (50, 200));
        assert_eq!((cfg.final_min, cfg.final_max), (30, 200));
        assert_eq!(cfg.summary_body_threshold, 100);
        assert_eq!((cfg.summary_min, cfg.summary_max), (20, 200));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: DalilConfig = serde_json::from_str(r#"{"import":{"article_max":250}}"#).unwrap();
        assert_eq!(cfg.import.article_max, 250);
        assert_eq!(cfg.import.article_min, 50);
    }
}
