//! Document generation command handlers.

use crate::settings::Settings;
use scrivano_docgen::{export_documents, generate_documents, preview, read_dataset, read_template};
use scrivano_error::ScrivanoResult;
use std::path::Path;

/// Merge a dataset and a template, then export the documents.
pub fn run_generate(
    dataset_path: &Path,
    template_path: &Path,
    out: Option<&Path>,
    settings: &Settings,
) -> ScrivanoResult<()> {
    let dataset = read_dataset(dataset_path)?;
    let template = read_template(template_path)?;
    let documents = generate_documents(&dataset, &template)?;

    let default_dir = Path::new(&settings.export_dir);
    let dir = out.unwrap_or(default_dir);
    let paths = export_documents(&documents, dir)?;

    println!("Wrote {} documents to {}", paths.len(), dir.display());
    for path in &paths {
        println!("  {}", path.display());
    }
    Ok(())
}

/// Render the template against the first dataset record and print it.
pub fn run_preview(dataset_path: &Path, template_path: &Path) -> ScrivanoResult<()> {
    let dataset = read_dataset(dataset_path)?;
    let template = read_template(template_path)?;

    match preview(&dataset, &template) {
        Some(rendered) => println!("{rendered}"),
        None => println!("Dataset has no records."),
    }
    Ok(())
}
