//! Error types for generation operations.

/// Status lines of HTTP failures worth retrying.
const TRANSIENT_HTTP: [&str; 4] = ["HTTP 500", "HTTP 502", "HTTP 503", "HTTP 504"];

/// Errors that can occur while generating text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InferenceError {
    /// Error from the model provider
    #[error("Provider Error: {0}")]
    ProviderError(String),
    /// Rate limit exceeded
    #[error("Rate Limit Exceeded")]
    RateLimit,
    /// Prompt exceeded the model's context window
    #[error("Context Length Exceeded")]
    ContextLengthExceeded,
    /// Network error during request
    #[error("Network Error: {0}")]
    NetworkError(String),
    /// Configuration error
    #[error("Configuration Error: {0}")]
    ConfigError(String),
    /// The provider refused to answer the prompt
    #[error("Prompt Blocked: {0}")]
    Blocked(String),
}

impl InferenceError {
    /// Returns `true` if this error is transient and retry may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit | Self::NetworkError(_) => true,
            Self::ProviderError(msg) => TRANSIENT_HTTP.iter().any(|s| msg.starts_with(s)),
            Self::ContextLengthExceeded | Self::ConfigError(_) | Self::Blocked(_) => false,
        }
    }

    /// Returns `true` if this error is permanent and should not be retried.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        !self.is_retryable()
    }
}
