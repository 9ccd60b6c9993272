//! Configuration management for the agent selector.
//!
//! Settings are layered: built-in defaults first, then environment variables
//! prefixed with `AGENT_SELECT` and split on `__`
//! (`AGENT_SELECT__SELECTOR__MODEL=gemini-1.5-pro`).
//!
//! # Example
//!
//! ```
//! use agent_selector::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! ```

pub mod inference;
pub mod selector;
pub mod telemetry;

pub use inference::InferenceSettings;
pub use selector::SelectorSettings;
pub use telemetry::TelemetrySettings;

use crate::inference::gemini::DEFAULT_BASE_URL;
use crate::selection::DEFAULT_MODEL;
use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

/// Prefix of environment variables read by [`Settings::new`].
pub const ENV_PREFIX: &str = "AGENT_SELECT";

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Generation provider settings.
    pub inference: InferenceSettings,
    /// Selector settings.
    pub selector: SelectorSettings,
    /// Telemetry settings.
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Creates a new settings instance from environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Self::environment())
    }

    /// Loads settings from an explicit variable map instead of the process
    /// environment. Keys use the same names as real environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn from_env_map(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::load(Self::environment().source(Some(vars)))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).separator("__")
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("inference.base_url", DEFAULT_BASE_URL)?
            .set_default("selector.model", DEFAULT_MODEL)?
            .set_default("selector.language", "zh")?
            .set_default("telemetry.service_name", "agent-selector")?
            .set_default("telemetry.log_level", "info")?
            .set_default("telemetry.json", true)?
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptLanguage;
    use secrecy::ExposeSecret;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_env_map(Map::new()).unwrap();

        assert!(settings.inference.api_key.is_none());
        assert_eq!(settings.inference.base_url, DEFAULT_BASE_URL);
        assert!(settings.inference.max_retries.is_none());
        assert_eq!(settings.selector.model, DEFAULT_MODEL);
        assert_eq!(settings.selector.language, PromptLanguage::Chinese);
        assert_eq!(settings.telemetry.service_name, "agent-selector");
        assert_eq!(settings.telemetry.log_level, "info");
        assert!(settings.telemetry.json);
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::from_env_map(vars(&[
            ("AGENT_SELECT__INFERENCE__API_KEY", "secret"),
            ("AGENT_SELECT__INFERENCE__MAX_RETRIES", "2"),
            ("AGENT_SELECT__INFERENCE__TIMEOUT_MS", "15000"),
            ("AGENT_SELECT__SELECTOR__MODEL", "gemini-1.5-pro"),
            ("AGENT_SELECT__SELECTOR__LANGUAGE", "en"),
            ("AGENT_SELECT__TELEMETRY__JSON", "false"),
        ]))
        .unwrap();

        assert_eq!(
            settings
                .inference
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            Some("secret".to_string())
        );
        assert_eq!(settings.inference.max_retries, Some(2));
        assert_eq!(settings.inference.timeout_ms, Some(15000));
        assert_eq!(settings.selector.model, "gemini-1.5-pro");
        assert_eq!(settings.selector.language, PromptLanguage::English);
        assert!(!settings.telemetry.json);
    }

    #[test]
    fn test_unprefixed_variables_are_ignored() {
        let settings = Settings::from_env_map(vars(&[("SELECTOR__MODEL", "other")])).unwrap();
        assert_eq!(settings.selector.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result = Settings::from_env_map(vars(&[("AGENT_SELECT__SELECTOR__LANGUAGE", "fr")]));
        assert!(result.is_err());
    }
}
