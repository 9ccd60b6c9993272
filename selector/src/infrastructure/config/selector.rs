//! Selector configuration.

use crate::prompt::PromptLanguage;
use serde::Deserialize;

/// Agent selector settings.
#[derive(Debug, Deserialize, Clone)]
pub struct SelectorSettings {
    /// Model identifier used for scoring.
    pub model: String,
    /// Prompt language.
    #[serde(default)]
    pub language: PromptLanguage,
}
