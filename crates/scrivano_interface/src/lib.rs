//! Trait definitions and shared run model for the Scrivano pipeline.
//!
//! This crate provides the driver trait that generative backends implement,
//! together with the pipeline run data model and the event notifications the
//! executor emits for observers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod events;
mod run;
mod traits;

pub use events::PipelineEvent;
pub use run::{PipelineRun, PipelineStep, RunStatus};
pub use traits::ScrivanoDriver;
