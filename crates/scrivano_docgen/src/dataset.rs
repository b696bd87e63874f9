//! Dataset file reading.
//!
//! Dispatches on the file extension and delegates the heavy lifting to the
//! format libraries. Every parser produces the same shape: ordered column
//! names plus one record per row.

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use scrivano_core::{Dataset, DatasetRecord, Scalar};
use scrivano_error::{ParseError, ParseErrorKind, ScrivanoResult};
use std::io::Cursor;
use std::path::Path;

/// Read a dataset file, dispatching on its extension.
///
/// Supported extensions: `csv`, `json`, `xlsx`, `ods`, `txt`. For `txt`,
/// each non-blank line becomes one record with a single `text` column.
///
/// # Errors
///
/// Returns a typed parse error for unsupported extensions, unreadable
/// files, malformed content, or files that parse to zero records.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_dataset<P: AsRef<Path>>(path: P) -> ScrivanoResult<Dataset> {
    let path = path.as_ref();
    let extension = file_extension(path)?;

    let dataset = match extension.as_str() {
        "csv" => parse_csv(&read_text(path)?)?,
        "json" => parse_json(&read_text(path)?)?,
        "xlsx" | "ods" => parse_spreadsheet(&read_bytes(path)?)?,
        "txt" => parse_lines(&read_text(path)?)?,
        other => {
            return Err(ParseError::new(ParseErrorKind::UnsupportedDatasetExtension(
                other.to_string(),
            ))
            .into());
        }
    };

    tracing::info!(
        records = dataset.len(),
        columns = dataset.columns().len(),
        "Loaded dataset"
    );
    Ok(dataset)
}

/// Parse CSV text with a header row into a dataset.
pub fn parse_csv(text: &str) -> Result<Dataset, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| ParseError::new(ParseErrorKind::Csv(e.to_string())))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| ParseError::new(ParseErrorKind::Csv(e.to_string())))?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let mut record = DatasetRecord::new();
        for (index, field) in row.iter().enumerate() {
            if let Some(column) = columns.get(index) {
                record.insert(column.clone(), Scalar::from(field));
            }
        }
        records.push(record);
    }

    ensure_not_empty(Dataset::new(columns, records))
}

/// Parse JSON text into a dataset.
///
/// Accepts either an array of objects or a single object (one record).
pub fn parse_json(text: &str) -> Result<Dataset, ParseError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| ParseError::new(ParseErrorKind::Json(e.to_string())))?;

    let objects = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::new();
    for item in &objects {
        let object = item.as_object().ok_or_else(|| {
            ParseError::new(ParseErrorKind::Json(
                "expected an object or an array of objects".to_string(),
            ))
        })?;
        if columns.is_empty() {
            columns = object.keys().cloned().collect();
        }
        let record: DatasetRecord = object
            .iter()
            .map(|(key, value)| (key.clone(), Scalar::from_json(value)))
            .collect();
        records.push(record);
    }

    ensure_not_empty(Dataset::new(columns, records))
}

/// Parse an XLSX or ODS workbook into a dataset.
///
/// Uses the first sheet; its first row supplies the column names.
pub fn parse_spreadsheet(bytes: &[u8]) -> Result<Dataset, ParseError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| ParseError::new(ParseErrorKind::Spreadsheet(e.to_string())))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| ParseError::new(ParseErrorKind::EmptyDataset))?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| ParseError::new(ParseErrorKind::Spreadsheet(e.to_string())))?;

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let mut record = DatasetRecord::new();
        for (index, cell) in row.iter().enumerate() {
            if let Some(column) = columns.get(index) {
                record.insert(column.clone(), scalar_from_cell(cell));
            }
        }
        records.push(record);
    }

    ensure_not_empty(Dataset::new(columns, records))
}

/// Parse plain text into a dataset: one record per non-blank line, single
/// `text` column.
pub fn parse_lines(text: &str) -> Result<Dataset, ParseError> {
    let records: Vec<DatasetRecord> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| DatasetRecord::from([("text".to_string(), Scalar::from(line))]))
        .collect();

    ensure_not_empty(Dataset::new(vec!["text".to_string()], records))
}

fn scalar_from_cell(cell: &Data) -> Scalar {
    match cell {
        Data::Empty => Scalar::Text(String::new()),
        Data::String(s) => Scalar::Text(s.clone()),
        Data::Float(f) => Scalar::Number(*f),
        Data::Int(i) => Scalar::Number(*i as f64),
        Data::Bool(b) => Scalar::Bool(*b),
        other => Scalar::Text(other.to_string()),
    }
}

fn ensure_not_empty(dataset: Dataset) -> Result<Dataset, ParseError> {
    if dataset.is_empty() {
        Err(ParseError::new(ParseErrorKind::EmptyDataset))
    } else {
        Ok(dataset)
    }
}

pub(crate) fn file_extension(path: &Path) -> Result<String, ParseError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| {
            ParseError::new(ParseErrorKind::MissingExtension(
                path.display().to_string(),
            ))
        })
}

pub(crate) fn read_text(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path)
        .map_err(|e| ParseError::new(ParseErrorKind::FileRead(format!("{}: {}", path.display(), e))))
}

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>, ParseError> {
    std::fs::read(path)
        .map_err(|e| ParseError::new(ParseErrorKind::FileRead(format!("{}: {}", path.display(), e))))
}
