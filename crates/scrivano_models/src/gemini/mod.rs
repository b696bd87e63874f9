//! Google Gemini backend.

mod client;

pub use client::GeminiClient;

use scrivano_error::GeminiError;

/// Result type for Gemini-specific operations.
pub type GeminiResult<T> = Result<T, GeminiError>;
