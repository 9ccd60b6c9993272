/// Gemini `generateContent` client.
pub mod gemini;
/// The generation client trait.
pub mod provider;
/// Retry and backoff policy for HTTP clients.
pub mod retry;
/// Shared request, response and error types.
pub mod types;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use provider::GenerationClient;
pub use retry::RetryConfig;
pub use types::*;
