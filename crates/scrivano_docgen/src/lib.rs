//! Dataset loading, template loading, and document generation.
//!
//! This crate provides the peripheral adapters around the pipeline core:
//! reading tabular datasets (CSV, JSON, XLSX, ODS, plain text), reading
//! templates (plain text, Markdown, DOCX), merging the two into generated
//! documents, and exporting documents to the filesystem under deterministic
//! names.
//!
//! Parsing failures are typed and leave caller state untouched; a failed
//! load never clears a previously loaded dataset or template.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dataset;
mod export;
mod generator;
mod template_file;

pub use dataset::{parse_csv, parse_json, parse_lines, parse_spreadsheet, read_dataset};
pub use export::export_documents;
pub use generator::{generate_documents, preview};
pub use template_file::{extract_docx_text, read_template};
