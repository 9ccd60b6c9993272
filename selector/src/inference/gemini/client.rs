//! Gemini API HTTP client implementation.

use crate::inference::gemini::mapping::{
    create_request, map_response, GeminiGenerateRequest, GeminiGenerateResponse,
};
use crate::inference::provider::GenerationClient;
use crate::inference::retry::{RetryConfig, DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_RETRIES};
use crate::inference::types::{GenerateRequest, GenerateResponse, InferenceError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, warn};

/// Public Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Configuration for the Gemini provider
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`
    pub api_key: SecretString,
    /// Base URL of the API, ending with `/`
    pub base_url: Url,
    /// Maximum number of retries for rate limits and transient errors
    pub max_retries: Option<u32>,
    /// Base delay in milliseconds for exponential backoff
    pub base_delay_ms: Option<u64>,
    /// Per-request timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

impl GeminiConfig {
    /// Creates a new config with default retry settings and no timeout
    #[must_use]
    pub fn new(api_key: SecretString, base_url: Url) -> Self {
        Self {
            api_key,
            base_url,
            max_retries: None,
            base_delay_ms: None,
            timeout_ms: None,
        }
    }

    /// Sets the maximum number of retries
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the base delay for exponential backoff
    #[must_use]
    pub fn with_base_delay_ms(mut self, delay_ms: u64) -> Self {
        self.base_delay_ms = Some(delay_ms);
        self
    }

    /// Sets the per-request timeout
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Provider implementation for the Gemini `generateContent` API.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
    retry_config: RetryConfig,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ConfigError`] if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, InferenceError> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| InferenceError::ConfigError(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            retry_config: RetryConfig::new()
                .with_max_retries(config.max_retries.unwrap_or(DEFAULT_MAX_RETRIES))
                .with_base_delay_ms(config.base_delay_ms.unwrap_or(DEFAULT_BASE_DELAY_MS)),
            config,
        })
    }

    /// Returns the retry policy in effect
    #[must_use]
    pub fn retry_config(&self) -> RetryConfig {
        self.retry_config
    }

    /// Makes a single request attempt
    async fn make_request(
        &self,
        model: &str,
        provider_req: &GeminiGenerateRequest,
    ) -> Result<GenerateResponse, InferenceError> {
        let res = self
            .build_api_request(model, provider_req)?
            .send()
            .await
            .map_err(|e| InferenceError::NetworkError(e.to_string()))?;

        Self::map_api_response(res).await
    }

    fn build_api_request(
        &self,
        model: &str,
        provider_req: &GeminiGenerateRequest,
    ) -> Result<reqwest::RequestBuilder, InferenceError> {
        let url = self
            .config
            .base_url
            .join(&format!("models/{model}:generateContent"))
            .map_err(|e| InferenceError::ConfigError(format!("Invalid URL join: {e}")))?;

        Ok(self
            .client
            .post(url)
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(provider_req))
    }

    async fn map_api_response(res: reqwest::Response) -> Result<GenerateResponse, InferenceError> {
        match res.status() {
            StatusCode::OK => {
                let body: GeminiGenerateResponse = res
                    .json()
                    .await
                    .map_err(|e| InferenceError::ProviderError(format!("Parse error: {e}")))?;

                map_response(body)
            }
            StatusCode::TOO_MANY_REQUESTS => Err(InferenceError::RateLimit),
            StatusCode::BAD_REQUEST => {
                let text = res.text().await.unwrap_or_default();
                if text.contains("exceeds the maximum number of tokens") {
                    Err(InferenceError::ContextLengthExceeded)
                } else {
                    Err(InferenceError::ProviderError(format!("Bad Request: {text}")))
                }
            }
            status => {
                let text = res.text().await.unwrap_or_default();
                Err(InferenceError::ProviderError(format!("HTTP {status}: {text}")))
            }
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiProvider {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, InferenceError> {
        let provider_req = create_request(request.prompt, request.output_format);

        let mut last_error = InferenceError::NetworkError("No attempts made".to_string());

        for attempt in 0..=self.retry_config.max_retries {
            match self.make_request(&request.model, &provider_req).await {
                Ok(response) => return Ok(response),
                Err(error) => {
                    last_error = error;

                    if last_error.is_permanent() || attempt >= self.retry_config.max_retries {
                        break;
                    }

                    let delay = self.retry_config.calculate_backoff_delay(attempt);
                    let delay_ms: u64 = delay.as_millis().try_into().unwrap_or(u64::MAX);
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.retry_config.max_retries,
                        delay_ms = delay_ms,
                        error = %last_error,
                        "Gemini request failed, retrying after backoff"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }

        debug!(model = %request.model, error = %last_error, "Gemini request failed");
        Err(last_error)
    }
}
