//! Generation provider configuration.
//!
//! This module defines the Gemini API settings.

use crate::inference::{GeminiConfig, InferenceError};
use reqwest::Url;
use secrecy::SecretString;
use serde::Deserialize;

/// Environment variables consulted, in order, when no key is configured.
pub const API_KEY_FALLBACK_VARS: [&str; 3] =
    ["GEMINI_API_KEY", "GOOGLE_API_KEY", "GOOGLE_GENAI_API_KEY"];

/// Generation provider settings.
#[derive(Debug, Deserialize, Clone)]
pub struct InferenceSettings {
    /// Gemini API key.
    pub api_key: Option<SecretString>,
    /// Base URL of the Gemini API.
    pub base_url: String,
    /// Maximum retries for transient failures.
    pub max_retries: Option<u32>,
    /// Base backoff delay in milliseconds.
    pub base_delay_ms: Option<u64>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl InferenceSettings {
    /// Builds the Gemini client configuration, taking the API key from the
    /// process environment when none is configured.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ConfigError`] if no API key is available or
    /// the base URL cannot be parsed.
    pub fn gemini_config(&self) -> Result<GeminiConfig, InferenceError> {
        self.gemini_config_with(|name| std::env::var(name).ok())
    }

    /// Same as [`gemini_config`](Self::gemini_config) with an explicit
    /// environment lookup.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ConfigError`] if no API key is available or
    /// the base URL cannot be parsed.
    pub fn gemini_config_with<F>(&self, lookup: F) -> Result<GeminiConfig, InferenceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = self.resolve_api_key(lookup).ok_or_else(|| {
            InferenceError::ConfigError(format!(
                "no Gemini API key configured (set inference.api_key or one of {})",
                API_KEY_FALLBACK_VARS.join(", ")
            ))
        })?;

        let mut config = GeminiConfig::new(api_key, self.parsed_base_url()?);
        if let Some(max_retries) = self.max_retries {
            config = config.with_max_retries(max_retries);
        }
        if let Some(delay_ms) = self.base_delay_ms {
            config = config.with_base_delay_ms(delay_ms);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout_ms(timeout_ms);
        }
        Ok(config)
    }

    fn resolve_api_key<F>(&self, lookup: F) -> Option<SecretString>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key.clone().or_else(|| {
            API_KEY_FALLBACK_VARS
                .iter()
                .find_map(|name| lookup(name).filter(|v| !v.is_empty()))
                .map(|key| SecretString::new(key.into_boxed_str()))
        })
    }

    /// Base URL with a trailing slash, so model paths join beneath it.
    fn parsed_base_url(&self) -> Result<Url, InferenceError> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).map_err(|e| {
            InferenceError::ConfigError(format!("Invalid base URL '{}': {e}", self.base_url))
        })
    }
}
