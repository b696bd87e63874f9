//! Trait definitions for generative text backends.

use async_trait::async_trait;
use scrivano_core::{GenerateRequest, GenerateResponse};
use scrivano_error::ScrivanoResult;

/// Core trait that all generative text backends must implement.
///
/// This provides the minimal interface for synchronous text generation. The
/// pipeline executor is generic over this trait, so test doubles and
/// alternate providers slot in without touching the executor.
#[async_trait]
pub trait ScrivanoDriver: Send + Sync {
    /// Generate model output for a text request.
    ///
    /// Latency is backend-determined and unbounded from the caller's point
    /// of view except for whatever timeout the backend itself enforces.
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when a request specifies none.
    fn model_name(&self) -> &str;
}
