//! Top-level error wrapper types.

use crate::{
    AgentError, BackendError, ConfigError, DocumentError, GeminiError, ParseError, PipelineError,
};
#[cfg(feature = "tui")]
use crate::TuiError;

/// This is the foundation error enum. Each Scrivano crate contributes the
/// variants for its own failure domain.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoError, BackendError};
///
/// let backend_err = BackendError::new("Connection failed");
/// let err: ScrivanoError = backend_err.into();
/// assert!(format!("{}", err).contains("Backend Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivanoErrorKind {
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Dataset or template file parse error
    #[from(ParseError)]
    Parse(ParseError),
    /// Document generation error
    #[from(DocumentError)]
    Document(DocumentError),
    /// Pipeline configuration or execution error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Agent invocation error
    #[from(AgentError)]
    Agent(AgentError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Scrivano error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoResult, ConfigError};
///
/// fn might_fail() -> ScrivanoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivano Error: {}", _0)]
pub struct ScrivanoError(Box<ScrivanoErrorKind>);

impl ScrivanoError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivanoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivanoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScrivanoErrorKind
impl<T> From<T> for ScrivanoError
where
    T: Into<ScrivanoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivano operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoResult, BackendError};
///
/// fn fetch_data() -> ScrivanoResult<String> {
///     Err(BackendError::new("404 Not Found"))?
/// }
/// ```
pub type ScrivanoResult<T> = std::result::Result<T, ScrivanoError>;
