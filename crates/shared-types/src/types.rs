use std::fmt;

/// Binary verdict of a single rule check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Pass,
    Fail,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Pass => "pass",
            RuleStatus::Fail => "fail",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, RuleStatus::Pass)
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one rule phrase against one document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleResult {
    pub rule: String, // Echoed back exactly as supplied
    pub status: RuleStatus,
    pub evidence: String,
    pub reasoning: String,
    pub confidence: u32, // Fixed per heuristic branch, informally 0-100
}

/// Body of a `/check` response
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckResponse {
    pub results: Vec<RuleResult>,
}
