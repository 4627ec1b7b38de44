// Generic keyword rule check
use super::CheckOutcome;
use crate::patterns::first_word;

const MATCH_CONFIDENCE: u32 = 60;
const MISS_CONFIDENCE: u32 = 30;

const NOT_DECISIVE: &str = "Heuristic not decisive for this rule.";

/// Passes if the rule phrase's first word occurs anywhere in the document
///
/// The word is matched as a literal, case-insensitive substring. `first_word`
/// already lowercases it, so only the document needs folding.
pub fn check(document_text: &str, rule: &str) -> CheckOutcome {
    let Some(word) = first_word(rule) else {
        return CheckOutcome::fail(NOT_DECISIVE, MISS_CONFIDENCE);
    };

    if document_text.to_lowercase().contains(&word) {
        CheckOutcome::pass(
            format!("Found keyword '{}' in document.", word),
            MATCH_CONFIDENCE,
        )
    } else {
        CheckOutcome::fail(NOT_DECISIVE, MISS_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::RuleStatus;

    #[test]
    fn test_finds_first_word() {
        let outcome = check("All widgets must be blue per the style guide.", "widgets must be blue");
        assert_eq!(outcome.status, RuleStatus::Pass);
        assert_eq!(outcome.evidence, "Found keyword 'widgets' in document.");
        assert_eq!(outcome.confidence, 60);
    }

    #[test]
    fn test_first_word_is_lowercased_and_case_insensitive() {
        let outcome = check("all WIDGETS are blue", "Widgets must be blue");
        assert_eq!(outcome.evidence, "Found keyword 'widgets' in document.");
    }

    #[test]
    fn test_first_word_is_substring_match() {
        let outcome = check("Subcontractors sign in daily.", "contractors must sign");
        assert_eq!(outcome.status, RuleStatus::Pass);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let outcome = check("cost is 5 dollars", "$5.00 minimum");
        assert_eq!(outcome.status, RuleStatus::Fail);

        let outcome = check("cost is $5.00 flat", "$5.00 minimum");
        assert_eq!(outcome.status, RuleStatus::Pass);
        assert_eq!(outcome.evidence, "Found keyword '$5.00' in document.");
    }

    #[test]
    fn test_very_long_first_word_is_found() {
        let word = "ab".repeat(60_000);
        let outcome = check(
            &format!("prefix {} suffix", word.to_uppercase()),
            &format!("{} must appear", word),
        );
        assert_eq!(outcome.status, RuleStatus::Pass);
        assert_eq!(outcome.confidence, 60);
        assert!(outcome.evidence.starts_with("Found keyword 'abab"));
    }

    #[test]
    fn test_missing_word_is_not_decisive() {
        let outcome = check("Nothing here.", "gadgets must be red");
        assert_eq!(outcome.status, RuleStatus::Fail);
        assert_eq!(outcome.evidence, "Heuristic not decisive for this rule.");
        assert_eq!(outcome.confidence, 30);
    }

    #[test]
    fn test_blank_rule_never_matches() {
        let outcome = check("any text at all", "   ");
        assert_eq!(outcome.status, RuleStatus::Fail);
        assert_eq!(outcome.evidence, NOT_DECISIVE);
    }
}
