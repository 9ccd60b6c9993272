//! Type definitions for generation requests.
//!
//! This module contains shared types used across all generation clients.

pub mod error;
pub mod request;
pub mod response;

pub use error::InferenceError;
pub use request::{GenerateRequest, OutputFormat};
pub use response::{GenerateResponse, Usage};
