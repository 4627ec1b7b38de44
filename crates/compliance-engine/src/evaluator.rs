//! Rule evaluation strategies
//!
//! [`RuleEvaluator`] is the seam between request handling and the logic that
//! decides a verdict. [`HeuristicEvaluator`] is the pattern-matching
//! implementation used by the server; a model-backed evaluator can be dropped
//! in behind the same trait without touching dispatch or response shaping.

use shared_types::RuleResult;
use tracing::debug;

use crate::rules::select_handler;

/// Reasoning attached to every heuristic verdict
pub const HEURISTIC_REASONING: &str = "Heuristic-based check (no LLM).";

/// Trait for rule evaluation strategies
pub trait RuleEvaluator: Send + Sync {
    /// Short identifier of the strategy
    fn name(&self) -> &str;

    /// Evaluate one rule phrase against the document text
    ///
    /// Must always return a definite verdict, even for empty text.
    fn evaluate(&self, document_text: &str, rule: &str) -> RuleResult;
}

/// Keyword-and-regex evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl RuleEvaluator for HeuristicEvaluator {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn evaluate(&self, document_text: &str, rule: &str) -> RuleResult {
        let handler = select_handler(rule);
        let outcome = (handler.check)(document_text, rule);

        debug!(
            "Rule '{}' classified as {:?}: {} ({})",
            rule, handler.category, outcome.status, outcome.confidence
        );

        RuleResult {
            rule: rule.to_string(),
            status: outcome.status,
            evidence: outcome.evidence,
            reasoning: HEURISTIC_REASONING.to_string(),
            confidence: outcome.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::RuleStatus;

    #[test]
    fn test_result_echoes_rule_and_reasoning() {
        let rule = "  Document must have a date ";
        let result = HeuristicEvaluator.evaluate("Effective 12/05/2023", rule);

        assert_eq!(
            result,
            RuleResult {
                rule: rule.to_string(),
                status: RuleStatus::Pass,
                evidence: "Found date-like text: '12/05/2023'".to_string(),
                reasoning: HEURISTIC_REASONING.to_string(),
                confidence: 88,
            }
        );
    }

    #[test]
    fn test_only_first_category_is_evaluated() {
        // Date wins over purpose, so a purpose heading does not help
        let result = HeuristicEvaluator.evaluate(
            "Purpose: to define safety procedures",
            "purpose and date",
        );
        assert_eq!(result.status, RuleStatus::Fail);
        assert_eq!(result.evidence, "No date-like text found in document.");
    }

    #[test]
    fn test_empty_text_hits_every_fail_branch() {
        let cases = [
            ("Document must have a date", "No date-like text found in document.", 26),
            ("State the purpose", "No Purpose/Objective heading or keyword found.", 28),
            ("Who is responsible", "No responsibility-related keywords found.", 30),
            ("widgets must be blue", "Heuristic not decisive for this rule.", 30),
        ];

        for (rule, evidence, confidence) in cases {
            let result = HeuristicEvaluator.evaluate("", rule);
            assert_eq!(result.status, RuleStatus::Fail, "rule: {}", rule);
            assert_eq!(result.evidence, evidence);
            assert_eq!(result.confidence, confidence);
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(HeuristicEvaluator.name(), "heuristic");
    }
}
