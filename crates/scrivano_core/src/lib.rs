//! Core data types for the Scrivano document pipeline workspace.
//!
//! This crate provides the foundation data types shared across the Scrivano
//! crates: agent configuration, generation requests and responses, dataset
//! records, generated documents, and the template renderer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod dataset;
mod document;
mod message;
mod request;
mod role;
mod scalar;
pub mod template;

pub use agent::{AgentConfig, AgentConfigBuilder};
pub use dataset::{Dataset, DatasetRecord};
pub use document::GeneratedDocument;
pub use message::{Message, MessageBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use scalar::Scalar;
