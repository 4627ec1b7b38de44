// Purpose / objective rule check
use super::CheckOutcome;
use crate::patterns::{PURPOSE_HEADING_PATTERN, PURPOSE_KEYWORD_PATTERN};

const HEADING_CONFIDENCE: u32 = 85;
const KEYWORD_CONFIDENCE: u32 = 70;
const MISS_CONFIDENCE: u32 = 28;

/// Looks for a heading-like line first, then for the bare keyword anywhere
pub fn check(document_text: &str, _rule: &str) -> CheckOutcome {
    if let Some(m) = PURPOSE_HEADING_PATTERN.find(document_text) {
        return CheckOutcome::pass(
            format!("Found heading: '{}'", m.as_str().trim()),
            HEADING_CONFIDENCE,
        );
    }

    if PURPOSE_KEYWORD_PATTERN.is_match(document_text) {
        CheckOutcome::pass(
            "Found 'purpose' or 'objective' keyword in document.",
            KEYWORD_CONFIDENCE,
        )
    } else {
        CheckOutcome::fail(
            "No Purpose/Objective heading or keyword found.",
            MISS_CONFIDENCE,
        )
    }
}
