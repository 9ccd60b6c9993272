//! Parsing of the model's scoring output.
//!
//! The model is asked for a bare JSON array, but in JSON mode some models
//! still wrap it in a markdown fence, so a single fenced block is unwrapped
//! before parsing.

use crate::selection::candidate::ScoredCandidate;
use serde_json::Value;
use thiserror::Error;

/// Why a model response could not be read as a list of scored candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseParseError {
    /// The text is not valid JSON.
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    /// The JSON is valid but is not an array.
    #[error("expected a JSON array of scored agents, found {found}")]
    NotAnArray {
        /// JSON type of the top-level value
        found: &'static str,
    },

    /// An array element lacks a string `name` or a numeric `score`.
    #[error("element {index} is not a scored agent: {message}")]
    InvalidCandidate {
        /// Position of the element in the array
        index: usize,
        /// Deserialization error
        message: String,
    },
}

/// Parses raw model text into scored candidates, in the order returned.
///
/// # Errors
///
/// Returns a [`ResponseParseError`] if the text is not JSON, is not an
/// array, or contains an element without `name` and `score`.
pub fn parse_scores(text: &str) -> Result<Vec<ScoredCandidate>, ResponseParseError> {
    let payload = unwrap_code_fence(text);

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ResponseParseError::InvalidJson(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ResponseParseError::NotAnArray {
            found: json_type(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| ResponseParseError::InvalidCandidate {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

fn unwrap_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = after_open.strip_suffix("```") else {
        return trimmed;
    };
    // drop the info string (e.g. "json") on the opening line
    match body.split_once('\n') {
        Some((_, rest)) => rest.trim(),
        None => body.trim(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
