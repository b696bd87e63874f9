//! Scrivano - dataset-to-document merge with sequential agent pipelines.
//!
//! Scrivano merges a tabular dataset with a text template into a set of
//! documents, then feeds text through a configurable ordered chain of
//! generative agents: each agent's output becomes the next agent's input,
//! per-step state is observable while the run is in flight, and a follow-up
//! generation step suggests questions after a fully successful run.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scrivano::{GeminiClient, Pipeline, PipelineExecutor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new()?;
//!     let executor = PipelineExecutor::new(client);
//!
//!     let run = executor
//!         .execute(&Pipeline::standard(), "text to transform", None)
//!         .await?;
//!     println!("{:?}", run.final_output());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Scrivano is organized as a workspace with focused crates:
//!
//! - `scrivano_core` - Core data types (AgentConfig, Dataset, templates)
//! - `scrivano_interface` - ScrivanoDriver trait and the run model
//! - `scrivano_error` - Error types
//! - `scrivano_models` - Gemini backend client
//! - `scrivano_docgen` - Dataset/template readers and document generation
//! - `scrivano_pipeline` - Sequential pipeline execution engine
//! - `scrivano_tui` - Terminal UI
//!
//! This crate (`scrivano`) re-exports everything for convenience.

// Re-export the workspace crates
pub use scrivano_core::*;
pub use scrivano_docgen::*;
pub use scrivano_error::*;
pub use scrivano_interface::*;
pub use scrivano_models::*;
pub use scrivano_pipeline::*;
pub use scrivano_tui::*;
