//! Dataset types for uploaded tabular data.

use crate::Scalar;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One dataset row: a mapping of column name to scalar value.
pub type DatasetRecord = HashMap<String, Scalar>;

/// An in-memory tabular dataset.
///
/// Holds the column names in their source order alongside the parsed
/// records. All dataset state is transient and scoped to one session.
///
/// # Examples
///
/// ```
/// use scrivano_core::{Dataset, Scalar};
/// use std::collections::HashMap;
///
/// let record = HashMap::from([("name".to_string(), Scalar::from("Ann"))]);
/// let dataset = Dataset::new(vec!["name".to_string()], vec![record]);
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset.columns(), &["name".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Dataset {
    /// Column names in source order
    columns: Vec<String>,
    /// Parsed records in source order
    records: Vec<DatasetRecord>,
}

impl Dataset {
    /// Create a dataset from columns and records.
    pub fn new(columns: Vec<String>, records: Vec<DatasetRecord>) -> Self {
        Self { columns, records }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first record, if any. Used by the live template preview.
    pub fn first(&self) -> Option<&DatasetRecord> {
        self.records.first()
    }
}
