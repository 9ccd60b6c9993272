//! Gemini API type mapping.
//!
//! This module provides types for mapping between internal and Gemini API formats.

use crate::inference::types::{GenerateResponse, InferenceError, OutputFormat, Usage};
use serde::{Deserialize, Serialize};

/// MIME type that switches Gemini into JSON mode
pub const JSON_MIME_TYPE: &str = "application/json";

/// A single text part of a content entry
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Text of the part; non-text parts carry none
    #[serde(default)]
    pub text: Option<String>,
}

/// A turn in the conversation
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Generation settings sent with a request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Output MIME type, e.g. `application/json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Gemini `generateContent` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateRequest {
    /// Conversation contents
    pub contents: Vec<GeminiContent>,
    /// Generation settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

/// A generated candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content; missing when generation was stopped early
    #[serde(default)]
    pub content: Option<GeminiContent>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback on the prompt itself
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPromptFeedback {
    /// Set when the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Gemini token accounting
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Tokens across all candidates
    #[serde(default)]
    pub candidates_token_count: u32,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: u32,
}

/// Gemini `generateContent` response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    /// Prompt feedback, present when the prompt was rejected
    #[serde(default)]
    pub prompt_feedback: Option<GeminiPromptFeedback>,
    /// Token usage
    #[serde(default)]
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

/// Creates a Gemini request for a single user prompt
#[must_use]
pub fn create_request(prompt: String, output_format: OutputFormat) -> GeminiGenerateRequest {
    let generation_config = match output_format {
        OutputFormat::Json => Some(GeminiGenerationConfig {
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
        }),
        OutputFormat::Text => None,
    };

    GeminiGenerateRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart { text: Some(prompt) }],
        }],
        generation_config,
    }
}

/// Maps a Gemini response to the internal [`GenerateResponse`]
///
/// # Errors
///
/// Returns [`InferenceError::Blocked`] when the prompt was rejected and
/// [`InferenceError::ProviderError`] when no candidate content came back.
pub fn map_response(body: GeminiGenerateResponse) -> Result<GenerateResponse, InferenceError> {
    let usage = body.usage_metadata.map(|u| Usage {
        prompt_tokens: u.prompt_token_count,
        completion_tokens: u.candidates_token_count,
        total_tokens: u.total_token_count,
    });

    let Some(candidate) = body.candidates.into_iter().next() else {
        return match body.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(InferenceError::Blocked(reason)),
            None => Err(InferenceError::ProviderError(
                "No candidates returned".to_string(),
            )),
        };
    };

    let Some(content) = candidate.content else {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unknown".to_string());
        return Err(InferenceError::ProviderError(format!(
            "Candidate has no content (finish reason: {reason})"
        )));
    };

    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();

    Ok(GenerateResponse { text, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_json_mode() {
        let request = create_request("Score".to_string(), OutputFormat::Json);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Score"}]}],
                "generationConfig": {"responseMimeType": "application/json"}
            })
        );
    }

    #[test]
    fn test_create_request_text_mode_omits_config() {
        let request = create_request("Hi".to_string(), OutputFormat::Text);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_map_response_success() {
        let body: GeminiGenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "[{\"name\":"}, {"text": "\"a\",\"score\":1}]"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 20, "totalTokenCount": 30}
        }))
        .unwrap();

        let response = map_response(body).unwrap();
        assert_eq!(response.text, r#"[{"name":"a","score":1}]"#);
        assert_eq!(
            response.usage,
            Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30
            })
        );
    }

    #[test]
    fn test_map_response_no_candidates() {
        let body: GeminiGenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            map_response(body),
            Err(InferenceError::ProviderError(_))
        ));
    }

    #[test]
    fn test_map_response_blocked_prompt() {
        let body: GeminiGenerateResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        match map_response(body) {
            Err(InferenceError::Blocked(reason)) => assert_eq!(reason, "SAFETY"),
            other => panic!("Expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_map_response_candidate_without_content() {
        let body: GeminiGenerateResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "RECITATION"}]
        }))
        .unwrap();

        match map_response(body) {
            Err(InferenceError::ProviderError(msg)) => assert!(msg.contains("RECITATION")),
            other => panic!("Expected ProviderError, got {other:?}"),
        }
    }
}
