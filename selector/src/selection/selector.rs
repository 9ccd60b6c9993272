//! The agent selector.
//!
//! One call renders the prompt, issues a single JSON-mode generation request
//! and parses the reply. There is no retry here: transport-level retries
//! belong to the [`GenerationClient`] and its errors are returned as-is.

use crate::card::AgentCard;
use crate::inference::{GeminiProvider, GenerateRequest, GenerationClient, InferenceError};
use crate::infrastructure::config::Settings;
use crate::prompt::{PromptBuilder, PromptLanguage};
use crate::selection::candidate::rank;
use crate::selection::outcome::{Ranking, Selection};
use crate::selection::parse::parse_scores;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Scores agent cards against a user message with a generative model.
#[derive(Clone)]
pub struct AgentSelector {
    client: Arc<dyn GenerationClient>,
    model: String,
    language: PromptLanguage,
}

impl AgentSelector {
    /// Creates a selector using [`DEFAULT_MODEL`] and the Chinese prompt.
    #[must_use]
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            language: PromptLanguage::default(),
        }
    }

    /// Builds a selector backed by a [`GeminiProvider`] from settings.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ConfigError`] if no API key can be found,
    /// the base URL is invalid, or the HTTP client cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self, InferenceError> {
        let provider = GeminiProvider::new(settings.inference.gemini_config()?)?;
        Ok(Self::new(Arc::new(provider))
            .with_model(settings.selector.model.clone())
            .with_language(settings.selector.language))
    }

    /// Sets the model identifier
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the prompt language
    #[must_use]
    pub fn with_language(mut self, language: PromptLanguage) -> Self {
        self.language = language;
        self
    }

    /// Model identifier sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Prompt language in use
    #[must_use]
    pub fn language(&self) -> PromptLanguage {
        self.language
    }

    /// Scores every card and returns them best first.
    ///
    /// Output that cannot be read as a JSON array of scored agents is logged
    /// and returned as [`Ranking::Unparseable`].
    ///
    /// # Errors
    ///
    /// Returns the [`InferenceError`] of the generation call unchanged.
    #[instrument(skip_all, fields(model = %self.model, agents = cards.len()))]
    pub async fn rank(&self, message: &str, cards: &[AgentCard]) -> Result<Ranking, InferenceError> {
        let prompt = PromptBuilder::build(message, cards, self.language);
        let response = self
            .client
            .generate(GenerateRequest::json(&self.model, prompt))
            .await?;

        info!(
            text = %response.text,
            total_tokens = ?response.total_tokens(),
            "Agent scoring response"
        );

        match parse_scores(&response.text) {
            Ok(scores) => {
                let ranked = rank(scores);
                info!(result = ?ranked, "Agent select result");

                for candidate in &ranked {
                    if !cards.iter().any(|card| card.name == candidate.name) {
                        warn!(agent = %candidate.name, "Model scored an agent that is not a candidate");
                    }
                }
                Ok(Ranking::Scored(ranked))
            }
            Err(err) => {
                error!(error = %err, text = %response.text, "Failed to parse agent selection result");
                Ok(Ranking::Unparseable(err))
            }
        }
    }

    /// Selects the highest-scoring agent for `message`.
    ///
    /// An empty array from the model yields [`Selection::Unscored`]; output
    /// that cannot be parsed yields [`Selection::Unparseable`].
    ///
    /// # Errors
    ///
    /// Returns the [`InferenceError`] of the generation call unchanged.
    pub async fn select(
        &self,
        message: &str,
        cards: &[AgentCard],
    ) -> Result<Selection, InferenceError> {
        let selection = self.rank(message, cards).await?.into_selection();
        if let Selection::Matched(candidate) = &selection {
            info!(agent = %candidate.name, score = candidate.score, "Agent selected");
        }
        Ok(selection)
    }
}
