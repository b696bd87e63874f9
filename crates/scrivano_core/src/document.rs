//! Generated document types.

use serde::{Deserialize, Serialize};

/// A document produced by rendering the template against one dataset record.
///
/// Documents are created in bulk on generation, may have their content
/// edited individually afterwards, and are replaced wholesale on
/// regeneration.
///
/// # Examples
///
/// ```
/// use scrivano_core::GeneratedDocument;
///
/// let doc = GeneratedDocument::new(0, "Hello Ann".to_string());
/// assert_eq!(doc.file_name, "document_1.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Zero-based index of the source record
    pub record_index: usize,
    /// Rendered document content
    pub content: String,
    /// Deterministic export file name (`document_<n>.txt`, 1-based)
    pub file_name: String,
}

impl GeneratedDocument {
    /// Create a document for the record at `record_index`.
    pub fn new(record_index: usize, content: String) -> Self {
        Self {
            record_index,
            content,
            file_name: Self::file_name_for(record_index),
        }
    }

    /// Deterministic file name for a record position (1-based numbering).
    pub fn file_name_for(record_index: usize) -> String {
        format!("document_{}.txt", record_index + 1)
    }
}
