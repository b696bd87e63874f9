//! Sequential agent pipeline execution for Scrivano.
//!
//! This crate provides the pipeline execution system that orchestrates
//! multi-agent LLM chains: each agent's output becomes the next agent's
//! input, per-step state is published to observers as it changes, a failure
//! halts the chain, and a follow-up generation step runs once after a fully
//! successful run.
//!
//! # Example
//!
//! ```rust,ignore
//! use scrivano_pipeline::{Pipeline, PipelineExecutor};
//! use scrivano_models::GeminiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load pipeline from TOML
//! let pipeline = Pipeline::from_file("pipelines/default.toml")?;
//!
//! // Create executor with Gemini driver
//! let client = GeminiClient::new()?;
//! let executor = PipelineExecutor::new(client);
//!
//! // Execute the pipeline
//! let run = executor.execute(&pipeline, "text to transform", None).await?;
//! println!("Completed {} steps", run.history.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod followup;
mod invoker;
mod pipeline;
mod provider;

pub use executor::PipelineExecutor;
pub use followup::{FOLLOW_UP_FALLBACK, FollowUpConfig, FollowUpGenerator};
pub use invoker::AgentInvoker;
pub use pipeline::{Pipeline, PipelineMetadata};
pub use provider::PipelineProvider;
