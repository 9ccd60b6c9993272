use crate::inference::types::{GenerateRequest, GenerateResponse, InferenceError};
use async_trait::async_trait;

/// A connection to a generative model.
///
/// Implementations are constructed once and shared (`Arc<dyn GenerationClient>`)
/// by every caller that needs generation.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generates text for a single prompt.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, InferenceError>;
}
