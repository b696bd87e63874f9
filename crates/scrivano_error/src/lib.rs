//! Error types for the Scrivano workspace.
//!
//! This crate provides the foundation error types used throughout the
//! Scrivano ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scrivano_error::{ScrivanoResult, BackendError};
//!
//! fn fetch_data() -> ScrivanoResult<String> {
//!     Err(BackendError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod backend;
mod config;
mod document;
mod error;
mod gemini;
mod parse;
mod pipeline;
#[cfg(feature = "tui")]
mod tui;

pub use agent::AgentError;
pub use backend::BackendError;
pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use error::{ScrivanoError, ScrivanoErrorKind, ScrivanoResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use parse::{ParseError, ParseErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
