//! Dataset and template file parse error types.

/// Specific error conditions for file parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ParseErrorKind {
    /// Dataset file extension is not supported
    #[display("Unsupported dataset file type: {}", _0)]
    UnsupportedDatasetExtension(String),
    /// Template file extension is not supported
    #[display("Unsupported template file type: {}", _0)]
    UnsupportedTemplateExtension(String),
    /// File has no extension to dispatch on
    #[display("Cannot determine file type of '{}': missing extension", _0)]
    MissingExtension(String),
    /// Failed to read the file from disk
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// CSV parsing failed
    #[display("Failed to parse CSV: {}", _0)]
    Csv(String),
    /// JSON parsing failed
    #[display("Failed to parse JSON: {}", _0)]
    Json(String),
    /// Spreadsheet (xlsx/ods) parsing failed
    #[display("Failed to parse spreadsheet: {}", _0)]
    Spreadsheet(String),
    /// DOCX text extraction failed
    #[display("Failed to extract DOCX text: {}", _0)]
    Docx(String),
    /// The file parsed but produced no records
    #[display("No data found in file")]
    EmptyDataset,
}

/// Parse error with source location tracking.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::UnsupportedDatasetExtension("pdf".to_string()));
/// assert!(format!("{}", err).contains("pdf"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    /// The specific error condition
    pub kind: ParseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
