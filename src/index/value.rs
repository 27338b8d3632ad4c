//! Filter value types.
//!
//! [`FilterValue`] is the typed stand-in for "anything the caller wants to
//! filter on that is not already a string": numbers, booleans, timestamps,
//! or a sequence of those. The query-side builder renders each variant to
//! its token string(s) at insertion time.
//!
//! # Examples
//!
//! ```
//! use kasugai::index::value::FilterValue;
//!
//! let value = FilterValue::Integer(123);
//! assert_eq!(value.tokens(), vec!["123"]);
//!
//! let list: FilterValue = vec!["a", "b"].into();
//! assert_eq!(list.tokens(), vec!["a", "b"]);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A value to derive filter tokens from.
///
/// # Rendering
///
/// - `Text`, `Integer`, `Float`, `Boolean` render with their display form
/// - `DateTime` renders as nanoseconds since the Unix epoch in decimal
/// - `List` renders each element recursively, one token per element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// UTC timestamp value
    DateTime(DateTime<Utc>),
    /// Sequence of values, one token per element
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Render this value to its token string(s).
    pub fn tokens(&self) -> Vec<String> {
        match self {
            FilterValue::Text(s) => vec![s.clone()],
            FilterValue::Integer(i) => vec![i.to_string()],
            FilterValue::Float(f) => vec![f.to_string()],
            FilterValue::Boolean(b) => vec![b.to_string()],
            // Out-of-range datetimes (beyond ~584 years either side of the
            // epoch) render as 0.
            FilterValue::DateTime(dt) => {
                vec![dt.timestamp_nanos_opt().unwrap_or_default().to_string()]
            }
            FilterValue::List(values) => values.iter().flat_map(FilterValue::tokens).collect(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::DateTime(value)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}
