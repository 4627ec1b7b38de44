// Date / temporal rule check
use super::CheckOutcome;
use crate::patterns::DATE_PATTERN;

const MATCH_CONFIDENCE: u32 = 88;
const MISS_CONFIDENCE: u32 = 26;

/// Passes if the document contains a year, numeric date, or month abbreviation
pub fn check(document_text: &str, _rule: &str) -> CheckOutcome {
    match DATE_PATTERN.find(document_text) {
        Some(m) => CheckOutcome::pass(
            format!("Found date-like text: '{}'", m.as_str()),
            MATCH_CONFIDENCE,
        ),
        None => CheckOutcome::fail("No date-like text found in document.", MISS_CONFIDENCE),
    }
}
