//! Trait abstraction for pipeline configuration providers.
//!
//! This module defines the `PipelineProvider` trait, which decouples the
//! pipeline executor from specific configuration formats (TOML files,
//! in-code defaults, test fixtures).

use scrivano_core::AgentConfig;

/// Provides access to pipeline configuration data.
///
/// By programming to this interface rather than concrete types, the
/// executor stays independent of where agent rosters come from, and tests
/// can supply fixtures without touching the filesystem.
pub trait PipelineProvider {
    /// Name of the pipeline for tracking and identification.
    fn name(&self) -> &str;

    /// Human-readable description of what the pipeline does.
    fn description(&self) -> &str;

    /// Ordered list of agents to execute in sequence.
    ///
    /// The executor processes agents in this exact order, one at a time.
    fn agents(&self) -> &[AgentConfig];
}
