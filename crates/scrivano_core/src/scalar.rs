//! Scalar values for dataset records.

use serde::{Deserialize, Serialize};

/// A single dataset cell value.
///
/// Dataset columns hold text, numbers, or booleans. The display form is the
/// string substituted into templates, so `Number(3.0)` renders as `3` and
/// `Bool(true)` renders as `true`.
///
/// # Examples
///
/// ```
/// use scrivano_core::Scalar;
///
/// assert_eq!(Scalar::Text("Ann".to_string()).to_string(), "Ann");
/// assert_eq!(Scalar::Number(3.0).to_string(), "3");
/// assert_eq!(Scalar::Bool(true).to_string(), "true");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value
    #[display("{_0}")]
    Bool(bool),
    /// Numeric value
    #[display("{_0}")]
    Number(f64),
    /// Text value
    #[display("{_0}")]
    Text(String),
}

impl Scalar {
    /// Convert a JSON value into a scalar.
    ///
    /// Strings, numbers, and booleans map directly. Null becomes the empty
    /// string. Nested arrays and objects are flattened to their JSON text so
    /// no data is silently dropped.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Scalar::Text(s.clone()),
            serde_json::Value::Number(n) => Scalar::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::Bool(b) => Scalar::Bool(*b),
            serde_json::Value::Null => Scalar::Text(String::new()),
            other => Scalar::Text(other.to_string()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}
