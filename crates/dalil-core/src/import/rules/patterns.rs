//! Common regex patterns for legal-text field extraction.
//!
//! Fixed patterns live here as statics. Section patterns whose capture
//! windows come from [`ImportConfig`](crate::models::ImportConfig) are
//! built by the window functions at pipeline construction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ImportError;

lazy_static! {
    // Text number: "n° 12-34", "N° 90/11", "numéro 08-09"
    pub static ref NUMERO: Regex = Regex::new(
        r"(?i)(?:n\s*[°º]|num[ée]ro)\s*(\d{1,4}[-/]\d{1,4})"
    ).unwrap();

    // French long date: "3 mars 2012", "1er janvier 1990"
    pub static ref DATE_FR_LONG: Regex = Regex::new(
        r"(?i)\b(1er|\d{1,2})\s+(janvier|f[ée]vrier|mars|avril|mai|juin|juillet|ao[ûu]t|septembre|octobre|novembre|d[ée]cembre)\s+(\d{4})"
    ).unwrap();

    // Issuing ministry: "ministère de la justice", "ministère du commerce"
    pub static ref MINISTERE: Regex = Regex::new(
        r"(?i)minist[èe]re\s+(?:charg[ée]\s+)?(?:de\s+la\s+|de\s+l['’]|des\s+|du\s+|de\s+)?([^,.;\n]{3,80})"
    ).unwrap();

    // Signing authority: "signé par le Premier ministre"
    pub static ref SIGNATAIRE: Regex = Regex::new(
        r"(?i)sign[ée]e?\s+par\s+([^,.;\n]{3,80})"
    ).unwrap();

    // Explicit subject line: "Objet : modalités d'application..."
    pub static ref OBJET_LABEL: Regex = Regex::new(
        r"(?i)\bobjet\s*:\s*([^\n]{5,200})"
    ).unwrap();
}

/// Build the "Article premier" pattern with a configured capture window.
///
/// Matches "article premier", "article 1er" or "article 1" followed by a
/// colon, capturing `min..=max` non-period characters.
pub fn article_one(min: usize, max: usize) -> Result<Regex, ImportError> {
    window_rule("article_1", min, max, |min, max| {
        format!(r"(?i)article\s+(?:premier|1er|1)\s*:\s*([^.]{{{min},{max}}})")
    })
}

/// Build the recitals pattern ("considérant que ...").
pub fn recitals(min: usize, max: usize) -> Result<Regex, ImportError> {
    window_rule("considerants", min, max, |min, max| {
        format!(r"(?i)consid[ée]rant\s+que\s+([^.]{{{min},{max}}})")
    })
}

/// Build the final-provisions pattern ("dispositions finales" or
/// "article final").
pub fn final_provisions(min: usize, max: usize) -> Result<Regex, ImportError> {
    window_rule("dispositions_finales", min, max, |min, max| {
        format!(r"(?i)(?:article\s+final|dispositions\s+finales)\s*:?\s*([^.]{{{min},{max}}})")
    })
}

fn window_rule(
    rule: &'static str,
    min: usize,
    max: usize,
    build: impl Fn(usize, usize) -> String,
) -> Result<Regex, ImportError> {
    if min > max {
        return Err(ImportError::Window { rule, min, max });
    }
    Regex::new(&build(min, max)).map_err(|source| ImportError::Rule { rule, source })
}
