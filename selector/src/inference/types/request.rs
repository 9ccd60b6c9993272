//! Request types for generation.

/// Output format requested from the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Free text
    #[default]
    Text,
    /// A JSON document
    Json,
}

/// Request for a single-prompt generation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The model to use
    pub model: String,
    /// The prompt text
    pub prompt: String,
    /// Requested output format
    pub output_format: OutputFormat,
}

impl GenerateRequest {
    /// Creates a free-text generation request
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            output_format: OutputFormat::Text,
        }
    }

    /// Creates a request that asks the model for JSON output
    #[must_use]
    pub fn json(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(model, prompt).with_output_format(OutputFormat::Json)
    }

    /// Sets the output format
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
