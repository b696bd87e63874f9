//! Document generation from a dataset and a template.

use scrivano_core::{Dataset, GeneratedDocument, template};
use scrivano_error::{DocumentError, DocumentErrorKind, ScrivanoResult};

/// Render the template once per dataset record.
///
/// Documents are numbered in record order; document `n` exports as
/// `document_<n+1>.txt`. Regeneration replaces the whole set.
///
/// # Errors
///
/// Returns a typed error when the dataset is empty or the template is
/// blank; no documents are produced in either case.
#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn generate_documents(
    dataset: &Dataset,
    template: &str,
) -> ScrivanoResult<Vec<GeneratedDocument>> {
    if template.trim().is_empty() {
        return Err(DocumentError::new(DocumentErrorKind::MissingTemplate).into());
    }
    if dataset.is_empty() {
        return Err(DocumentError::new(DocumentErrorKind::MissingDataset).into());
    }

    let documents: Vec<GeneratedDocument> = dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            GeneratedDocument::new(index, template::render_record(template, record))
        })
        .collect();

    tracing::info!(documents = documents.len(), "Generated documents");
    Ok(documents)
}

/// Render a live preview of the template against the first dataset record.
///
/// Unresolved placeholders re-emit themselves as literal `{{key}}` text so
/// missing columns stay visible. Returns `None` when no dataset is loaded.
pub fn preview(dataset: &Dataset, template: &str) -> Option<String> {
    dataset
        .first()
        .map(|record| template::render_record(template, record))
}
