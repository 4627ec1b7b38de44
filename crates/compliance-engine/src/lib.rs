pub mod evaluator;
pub mod patterns;
pub mod rules;

use std::sync::Arc;

use shared_types::{CheckResponse, RuleResult};
use tracing::info;

pub use evaluator::{HeuristicEvaluator, RuleEvaluator, HEURISTIC_REASONING};
pub use rules::{CheckOutcome, RuleCategory};

/// Maximum number of rule phrases accepted per request
pub const MAX_RULES: usize = 3;

/// Drop missing, empty, and whitespace-only rule phrases, keeping order
///
/// Kept phrases are returned untrimmed so they can be echoed back verbatim.
pub fn collect_rules<I>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    phrases
        .into_iter()
        .flatten()
        .filter(|phrase| !phrase.trim().is_empty())
        .collect()
}

/// Evaluate a single rule phrase with the heuristic evaluator
pub fn evaluate_rule(document_text: &str, rule: &str) -> RuleResult {
    HeuristicEvaluator.evaluate(document_text, rule)
}

/// ComplianceEngine entry point
#[derive(Clone)]
pub struct ComplianceEngine {
    evaluator: Arc<dyn RuleEvaluator>,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self::with_evaluator(Arc::new(HeuristicEvaluator))
    }

    pub fn with_evaluator(evaluator: Arc<dyn RuleEvaluator>) -> Self {
        Self { evaluator }
    }

    pub fn evaluator_name(&self) -> &str {
        self.evaluator.name()
    }

    /// Evaluate every rule against the document text, in order
    pub fn check_rules(&self, document_text: &str, rules: &[String]) -> CheckResponse {
        let results: Vec<RuleResult> = rules
            .iter()
            .map(|rule| self.evaluator.evaluate(document_text, rule))
            .collect();

        let passed = results.iter().filter(|r| r.status.is_pass()).count();
        info!(
            "Evaluated {} rules with {} evaluator: {} passed",
            results.len(),
            self.evaluator_name(),
            passed
        );

        CheckResponse { results }
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
