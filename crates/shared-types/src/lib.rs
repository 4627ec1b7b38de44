pub mod types;

pub use types::{CheckResponse, RuleResult, RuleStatus};
