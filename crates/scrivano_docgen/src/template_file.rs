//! Template file reading.

use crate::dataset::{file_extension, read_bytes, read_text};
use quick_xml::events::Event;
use scrivano_error::{ParseError, ParseErrorKind, ScrivanoResult};
use std::io::Read;
use std::path::Path;

/// Read a template file, dispatching on its extension.
///
/// Supported extensions: `txt`, `md`, `markdown` (raw text) and `docx`
/// (text extraction).
///
/// # Errors
///
/// Returns a typed parse error for unsupported extensions, unreadable
/// files, or malformed DOCX archives.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_template<P: AsRef<Path>>(path: P) -> ScrivanoResult<String> {
    let path = path.as_ref();
    let extension = file_extension(path)?;

    let content = match extension.as_str() {
        "txt" | "md" | "markdown" => read_text(path)?,
        "docx" => extract_docx_text(&read_bytes(path)?)?,
        other => {
            return Err(ParseError::new(ParseErrorKind::UnsupportedTemplateExtension(
                other.to_string(),
            ))
            .into());
        }
    };

    tracing::info!(length = content.len(), "Loaded template");
    Ok(content)
}

/// Extract the raw text content of a DOCX document.
///
/// A DOCX file is a zip archive; the document body lives in
/// `word/document.xml`. Text is carried in `w:t` runs, with `w:p` elements
/// delimiting paragraphs and `w:br` marking manual breaks. Formatting is
/// discarded, matching the template reader contract.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ParseError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ParseError::new(ParseErrorKind::Docx(e.to_string())))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ParseError::new(ParseErrorKind::Docx(e.to_string())))?
        .read_to_string(&mut xml)
        .map_err(|e| ParseError::new(ParseErrorKind::Docx(e.to_string())))?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.local_name().as_ref() == b"br" => text.push('\n'),
            Ok(Event::Text(t)) if in_text_run => {
                let run = t
                    .unescape()
                    .map_err(|e| ParseError::new(ParseErrorKind::Docx(e.to_string())))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::new(ParseErrorKind::Docx(e.to_string()))),
            _ => {}
        }
    }

    Ok(text)
}
