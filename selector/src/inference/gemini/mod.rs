//! Google Gemini API provider implementation.
//!
//! This module talks to the `generateContent` endpoint of the Gemini API.

pub mod client;
pub mod mapping;

pub use client::{GeminiConfig, GeminiProvider, DEFAULT_BASE_URL};
pub use mapping::{
    create_request, map_response, GeminiContent, GeminiGenerateRequest, GeminiGenerateResponse,
    GeminiPart,
};
