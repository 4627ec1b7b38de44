//! Environment configuration

use std::fmt;

/// Default model name when `OPENAI_MODEL` is unset
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Settings for the language-model integration point
///
/// Loaded and reported at startup. Rule evaluation currently always uses the
/// heuristic evaluator, so nothing here is sent anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub model: String,
}

impl LlmSettings {
    /// Read `OPENAI_API_KEY` and `OPENAI_MODEL` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());
        let model = lookup("OPENAI_MODEL")
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());

        Self { api_key, model }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_string(),
        }
    }
}

// Keep the key out of logs
impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = LlmSettings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, LlmSettings::default());
        assert!(!settings.is_configured());
        assert_eq!(settings.model, "gpt-4o-mini");
    }

    #[test]
    fn test_reads_key_and_model() {
        let settings = LlmSettings::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
        ]));
        assert!(settings.is_configured());
        assert_eq!(settings.model, "gpt-4o");
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let settings = LlmSettings::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")]));
        assert!(!settings.is_configured());
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = LlmSettings::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-secret")]));
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
