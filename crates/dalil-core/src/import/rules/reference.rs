//! Reference extraction: text number, issuing ministry, signing authority.

use super::patterns::{MINISTERE, NUMERO, SIGNATAIRE};
use super::FieldRule;

/// Extracts the official text number ("n° 12-34").
pub struct NumeroRule;

impl FieldRule for NumeroRule {
    fn key(&self) -> &'static str {
        "numero"
    }

    fn extract(&self, text: &str) -> Option<String> {
        NUMERO.captures(text).map(|caps| caps[1].to_string())
    }
}

/// Extracts the issuing ministry name.
pub struct MinistereRule;

impl FieldRule for MinistereRule {
    fn key(&self) -> &'static str {
        "ministere"
    }

    fn extract(&self, text: &str) -> Option<String> {
        MINISTERE
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

/// Extracts the signing authority ("signé par ...").
pub struct SignataireRule;

impl FieldRule for SignataireRule {
    fn key(&self) -> &'static str {
        "signataire"
    }

    fn extract(&self, text: &str) -> Option<String> {
        SIGNATAIRE
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numero_first_match_only() {
        let rule = NumeroRule;
        assert_eq!(
            rule.extract("Décret n° 12-34 modifiant le décret n° 08-09"),
            Some("12-34".to_string())
        );
    }

    #[test]
    fn ministere_captures_name() {
        let rule = MinistereRule;
        assert_eq!(
            rule.extract("Le ministère de la justice a publié le texte, suite"),
            Some("justice a publié le texte".to_string())
        );
    }

    #[test]
    fn signataire_captures_authority() {
        let rule = SignataireRule;
        assert_eq!(
            rule.extract("Texte signé par le Premier ministre, le 3 mars 2012"),
            Some("le Premier ministre".to_string())
        );
    }

    #[test]
    fn absent_patterns_contribute_no_keys() {
        assert_eq!(NumeroRule.extract("texte sans référence"), None);
        assert_eq!(MinistereRule.extract("texte sans autorité"), None);
        assert_eq!(SignataireRule.extract("texte sans signature"), None);
    }
}
