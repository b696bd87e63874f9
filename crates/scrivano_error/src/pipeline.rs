//! Pipeline configuration and execution error types.

/// Specific error conditions for pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Failed to read pipeline file
    #[display("Failed to read pipeline file: {}", _0)]
    FileRead(String),
    /// Failed to parse TOML content
    #[display("Failed to parse TOML: {}", _0)]
    TomlParse(String),
    /// Agent name is empty or duplicated
    #[display("Invalid agent name: {}", _0)]
    InvalidAgentName(String),
    /// A generation parameter is out of range
    #[display("Agent '{}' has an invalid parameter: {}", agent, message)]
    InvalidParameter {
        /// Agent name
        agent: String,
        /// Description of the violation
        message: String,
    },
    /// The run input was empty after trimming
    #[display("Pipeline input cannot be empty")]
    EmptyInput,
    /// A run is already executing on this executor
    #[display("A pipeline run is already in progress")]
    RunInProgress,
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::EmptyInput);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
