//! Generative backend integrations for Scrivano.
//!
//! Currently provides the Google Gemini client used by the pipeline
//! executor and the follow-up generator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{GeminiClient, GeminiResult};
