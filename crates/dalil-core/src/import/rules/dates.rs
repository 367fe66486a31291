//! French long-form date extraction for legal texts.
//!
//! Official texts carry dates like "du 3 mars 2012" or
//! "du 1er janvier 1990"; the rule normalizes the first valid one to
//! ISO form so the date fields can be merged directly.

use chrono::NaiveDate;

use super::patterns::DATE_FR_LONG;
use super::FieldRule;

/// Extracts the publication date from the text, normalized to ISO.
pub struct DateJournalRule;

impl FieldRule for DateJournalRule {
    fn key(&self) -> &'static str {
        "date_journal"
    }

    fn extract(&self, text: &str) -> Option<String> {
        DATE_FR_LONG
            .captures_iter(text)
            .filter_map(|caps| {
                let day = parse_day(&caps[1])?;
                let month = french_month_to_number(&caps[2])?;
                let year: i32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            })
            .next()
            .map(|date| date.to_string())
    }
}

/// Parse a standalone French long date, e.g. "3 mars 2012".
pub fn parse_french_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_FR_LONG.captures(text)?;
    let day = parse_day(&caps[1])?;
    let month = french_month_to_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_day(s: &str) -> Option<u32> {
    if s.eq_ignore_ascii_case("1er") {
        return Some(1);
    }
    s.parse().ok()
}

fn french_month_to_number(month: &str) -> Option<u32> {
    match month.to_lowercase().as_str() {
        "janvier" => Some(1),
        "février" | "fevrier" => Some(2),
        "mars" => Some(3),
        "avril" => Some(4),
        "mai" => Some(5),
        "juin" => Some(6),
        "juillet" => Some(7),
        "août" | "aout" => Some(8),
        "septembre" => Some(9),
        "octobre" => Some(10),
        "novembre" => Some(11),
        "décembre" | "decembre" => Some(12),
        _ => None,
    }
}
