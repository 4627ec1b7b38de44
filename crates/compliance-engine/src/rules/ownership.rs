// Responsibility / ownership rule check
use super::CheckOutcome;
use crate::patterns::{OWNERSHIP_KEYWORD_PATTERN, OWNERSHIP_PHRASE_PATTERN};

const PHRASE_CONFIDENCE: u32 = 86;
const KEYWORD_CONFIDENCE: u32 = 70;
const MISS_CONFIDENCE: u32 = 30;

/// Looks for "responsible/owner/accountable" followed by a named party
pub fn check(document_text: &str, _rule: &str) -> CheckOutcome {
    if let Some(m) = OWNERSHIP_PHRASE_PATTERN.find(document_text) {
        return CheckOutcome::pass(
            format!("Found responsibility phrase: '{}'", m.as_str().trim()),
            PHRASE_CONFIDENCE,
        );
    }

    if OWNERSHIP_KEYWORD_PATTERN.is_match(document_text) {
        CheckOutcome::pass("Found responsibility-related keywords.", KEYWORD_CONFIDENCE)
    } else {
        CheckOutcome::fail("No responsibility-related keywords found.", MISS_CONFIDENCE)
    }
}
