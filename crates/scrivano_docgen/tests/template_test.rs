// Template reader tests, including DOCX text extraction from a minimal
// archive constructed in-test.

use scrivano_docgen::{extract_docx_text, read_template};
use std::io::Write;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>{{name}}</w:t></w:r></w:p>
    <w:p><w:r><w:t>Second paragraph</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

fn docx_bytes() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .expect("Failed to start zip entry");
    writer
        .write_all(DOCUMENT_XML.as_bytes())
        .expect("Failed to write zip entry");
    writer.finish().expect("Failed to finish zip").into_inner()
}

#[test]
fn docx_text_runs_are_concatenated() {
    let text = extract_docx_text(&docx_bytes()).unwrap();
    assert!(text.contains("Hello {{name}}"));
    assert!(text.contains("Second paragraph"));
}

#[test]
fn docx_paragraphs_break_lines() {
    let text = extract_docx_text(&docx_bytes()).unwrap();
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines, vec!["Hello {{name}}", "Second paragraph"]);
}

#[test]
fn docx_without_document_xml_is_rejected() {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("unrelated.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"nothing").unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    assert!(extract_docx_text(&bytes).is_err());
}

#[test]
fn plain_text_templates_read_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("letter.md");
    std::fs::write(&path, "Dear {{name}},\n").unwrap();

    assert_eq!(read_template(&path).unwrap(), "Dear {{name}},\n");
}

#[test]
fn docx_files_read_through_the_dispatcher() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("letter.docx");
    std::fs::write(&path, docx_bytes()).unwrap();

    let text = read_template(&path).unwrap();
    assert!(text.contains("Hello {{name}}"));
}

#[test]
fn unsupported_template_extension_names_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("letter.odt");
    std::fs::write(&path, "irrelevant").unwrap();

    let err = read_template(&path).unwrap_err();
    assert!(err.to_string().contains("odt"));
}
