//! Document generation error types.

/// Specific error conditions for document generation and export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DocumentErrorKind {
    /// No dataset has been loaded
    #[display("Please provide a dataset before generating documents")]
    MissingDataset,
    /// No template has been loaded
    #[display("Please provide a template before generating documents")]
    MissingTemplate,
    /// Failed to create the export directory
    #[display("Failed to create export directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write an exported document
    #[display("Failed to write document '{}': {}", name, message)]
    Write {
        /// Target file name
        name: String,
        /// Underlying error message
        message: String,
    },
}

/// Document error with source location tracking.
///
/// # Examples
///
/// ```
/// use scrivano_error::{DocumentError, DocumentErrorKind};
///
/// let err = DocumentError::new(DocumentErrorKind::MissingTemplate);
/// assert!(format!("{}", err).contains("template"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    /// The specific error condition
    pub kind: DocumentErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DocumentError {
    /// Create a new DocumentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
