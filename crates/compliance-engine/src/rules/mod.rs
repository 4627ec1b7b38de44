//! Category checks for rule phrases
//!
//! A rule phrase is routed to exactly one check. [`CATEGORY_HANDLERS`] is
//! walked in order and the first handler whose trigger keyword appears in the
//! lowercased phrase wins; anything unmatched falls through to the generic
//! keyword check.

pub mod date;
pub mod generic;
pub mod ownership;
pub mod purpose;

use shared_types::RuleStatus;

use crate::patterns::{contains_any, DATE_TRIGGERS, OWNERSHIP_TRIGGERS, PURPOSE_TRIGGERS};

/// Category a rule phrase is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Date,
    Purpose,
    Ownership,
    Generic,
}

impl RuleCategory {
    /// Classify a rule phrase (first matching handler wins)
    pub fn classify(rule: &str) -> Self {
        select_handler(rule).category
    }
}

/// Verdict produced by a category check, before it is attached to a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: RuleStatus,
    pub evidence: String,
    pub confidence: u32,
}

impl CheckOutcome {
    pub fn pass(evidence: impl Into<String>, confidence: u32) -> Self {
        Self {
            status: RuleStatus::Pass,
            evidence: evidence.into(),
            confidence,
        }
    }

    pub fn fail(evidence: impl Into<String>, confidence: u32) -> Self {
        Self {
            status: RuleStatus::Fail,
            evidence: evidence.into(),
            confidence,
        }
    }
}

/// Check signature: `(document_text, rule_phrase)`
pub type CheckFn = fn(&str, &str) -> CheckOutcome;

/// A category together with the phrase keywords that select it
pub struct CategoryHandler {
    pub category: RuleCategory,
    pub triggers: &'static [&'static str],
    pub check: CheckFn,
}

/// Ordered handler table; position is precedence
pub static CATEGORY_HANDLERS: &[CategoryHandler] = &[
    CategoryHandler {
        category: RuleCategory::Date,
        triggers: DATE_TRIGGERS,
        check: date::check,
    },
    CategoryHandler {
        category: RuleCategory::Purpose,
        triggers: PURPOSE_TRIGGERS,
        check: purpose::check,
    },
    CategoryHandler {
        category: RuleCategory::Ownership,
        triggers: OWNERSHIP_TRIGGERS,
        check: ownership::check,
    },
];

/// Fallback when no trigger matches
pub static GENERIC_HANDLER: CategoryHandler = CategoryHandler {
    category: RuleCategory::Generic,
    triggers: &[],
    check: generic::check,
};

/// Pick the handler for a rule phrase
pub fn select_handler(rule: &str) -> &'static CategoryHandler {
    let rule_lower = rule.to_lowercase();
    CATEGORY_HANDLERS
        .iter()
        .find(|handler| contains_any(&rule_lower, handler.triggers))
        .unwrap_or(&GENERIC_HANDLER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_each_category() {
        assert_eq!(RuleCategory::classify("Document must have a date"), RuleCategory::Date);
        assert_eq!(RuleCategory::classify("State the PURPOSE"), RuleCategory::Purpose);
        assert_eq!(RuleCategory::classify("Who is responsible"), RuleCategory::Ownership);
        assert_eq!(RuleCategory::classify("Name the process owner"), RuleCategory::Ownership);
        assert_eq!(RuleCategory::classify("widgets must be blue"), RuleCategory::Generic);
    }

    #[test]
    fn test_precedence_is_table_order() {
        // Both date and purpose keywords: date wins
        assert_eq!(
            RuleCategory::classify("purpose and effective date"),
            RuleCategory::Date
        );
        // Both purpose and ownership keywords: purpose wins
        assert_eq!(
            RuleCategory::classify("scope of the accountable team"),
            RuleCategory::Purpose
        );
    }

    #[test]
    fn test_triggers_are_substrings() {
        // "today" contains "day", "claim" contains "aim"
        assert_eq!(RuleCategory::classify("signed today"), RuleCategory::Date);
        assert_eq!(RuleCategory::classify("list each claim"), RuleCategory::Purpose);
    }

    #[test]
    fn test_empty_rule_is_generic() {
        assert_eq!(RuleCategory::classify(""), RuleCategory::Generic);
    }
}
