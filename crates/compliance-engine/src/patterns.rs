//! Keyword tables and regex patterns used by the rule checks

use lazy_static::lazy_static;
use regex::Regex;

/// Rule phrase keywords that select the date check
pub const DATE_TRIGGERS: &[&str] = &["date", "day", "year", "month"];

/// Rule phrase keywords that select the purpose check
pub const PURPOSE_TRIGGERS: &[&str] = &["purpose", "objective", "scope", "aim"];

/// Rule phrase keywords that select the ownership check
/// ("respons" covers responsible/responsibility)
pub const OWNERSHIP_TRIGGERS: &[&str] = &["respons", "owner", "accountable"];

lazy_static! {
    /// Four-digit year 1900-2099, numeric D/M/Y date, or month abbreviation
    pub static ref DATE_PATTERN: Regex = Regex::new(
        r"(?i)\b(?:19|20)\d{2}\b|\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b"
    )
    .unwrap();

    /// Line starting with a purpose-style heading word
    pub static ref PURPOSE_HEADING_PATTERN: Regex =
        Regex::new(r"(?mi)^\s*(purpose|objective|scope|aim)\s*[:\-]?\s*(.*)$").unwrap();

    /// Purpose-style word anywhere in the text
    pub static ref PURPOSE_KEYWORD_PATTERN: Regex =
        Regex::new(r"(?i)\b(?:purpose|objective|scope|aim)\b").unwrap();

    /// Responsibility word followed by up to 120 characters of context
    pub static ref OWNERSHIP_PHRASE_PATTERN: Regex =
        Regex::new(r"(?mi)(responsible|owner|accountable)[\s:\-]+(.{1,120})").unwrap();

    /// Responsibility word anywhere in the text
    pub static ref OWNERSHIP_KEYWORD_PATTERN: Regex =
        Regex::new(r"(?i)\b(?:responsible|owner|accountable)\b").unwrap();
}

/// Check if already-lowercased text contains any of the keywords
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

/// Lowercased first whitespace-delimited token of a rule phrase
pub fn first_word(rule: &str) -> Option<String> {
    rule.split_whitespace().next().map(|word| word.to_lowercase())
}
