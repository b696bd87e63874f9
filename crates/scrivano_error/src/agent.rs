//! Agent invocation error types.

/// Error from a single agent invocation.
///
/// Wraps the underlying backend failure with the name of the agent whose
/// call failed. The pipeline executor records the display form on the
/// offending step and halts the run.
///
/// # Examples
///
/// ```
/// use scrivano_error::AgentError;
///
/// let err = AgentError::new("Summarizer", "HTTP 503 error: overloaded");
/// assert!(format!("{}", err).contains("Summarizer"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Agent '{}' failed: {}", agent, message)]
pub struct AgentError {
    /// Name of the agent whose invocation failed
    pub agent: String,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AgentError {
    /// Create a new AgentError with automatic location tracking.
    #[track_caller]
    pub fn new(agent: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            agent: agent.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
