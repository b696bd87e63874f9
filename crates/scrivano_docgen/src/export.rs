//! Filesystem export for generated documents.

use scrivano_core::GeneratedDocument;
use scrivano_error::{DocumentError, DocumentErrorKind, ScrivanoResult};
use std::path::{Path, PathBuf};

/// Write generated documents into `dir` under their deterministic names.
///
/// Creates the directory if it does not exist and returns the written
/// paths in document order.
///
/// # Errors
///
/// Returns a typed error if the directory cannot be created or a document
/// cannot be written.
#[tracing::instrument(skip(documents), fields(count = documents.len(), dir = %dir.as_ref().display()))]
pub fn export_documents<P: AsRef<Path>>(
    documents: &[GeneratedDocument],
    dir: P,
) -> ScrivanoResult<Vec<PathBuf>> {
    let dir = dir.as_ref();

    std::fs::create_dir_all(dir).map_err(|e| {
        DocumentError::new(DocumentErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    })?;

    let mut paths = Vec::with_capacity(documents.len());
    for document in documents {
        let path = dir.join(&document.file_name);
        std::fs::write(&path, &document.content).map_err(|e| {
            DocumentError::new(DocumentErrorKind::Write {
                name: document.file_name.clone(),
                message: e.to_string(),
            })
        })?;
        paths.push(path);
    }

    tracing::info!(written = paths.len(), "Exported documents");
    Ok(paths)
}
