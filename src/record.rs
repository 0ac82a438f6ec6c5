//! Input records and the fail-soft field extraction helpers.
//!
//! A [`Record`] is one row of payroll data: a mapping from exact field name to
//! a textual or numeric value.  The renderer never mutates it.  Lookups are
//! deliberately total: a missing field degrades to an empty string or zero,
//! and numeric conversion failures are coerced to zero instead of propagated.

use std::collections::HashMap;

/// Textual artifact left behind when a missing numeric cell is serialized to
/// text upstream.  Cleaned up uniformly before display.
pub const NAN_SENTINEL: &str = "nan";

/// A single field value as supplied by the upstream table.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free-form text, e.g. a city name or rider identifier.
    Text(String),
    /// A numeric cell.
    Number(f64),
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for FieldValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

/// One person's one-period payroll figures, keyed by exact field name.
///
/// Field names must match the upstream spreadsheet headers byte-for-byte,
/// including their labeling quirks (see [`crate::layout`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Inserts a field and returns the updated record.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the raw value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns the number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Extracts a field as display text.
    ///
    /// Absent fields and the `nan` serialization sentinel both resolve to an
    /// empty string.  Numeric values are formatted with their natural decimal
    /// representation.
    pub fn text(&self, name: &str) -> String {
        match self.fields.get(name) {
            None => String::new(),
            Some(FieldValue::Text(text)) => normalize_text(text).to_owned(),
            Some(FieldValue::Number(number)) => {
                if number.is_nan() {
                    String::new()
                } else {
                    number.to_string()
                }
            }
        }
    }

    /// Extracts a field as an amount.
    ///
    /// This function is total: absent fields, unparseable text, the `nan`
    /// sentinel and non-finite numbers all resolve to `0.0`.  The result is
    /// always finite.
    pub fn amount(&self, name: &str) -> f64 {
        let value = match self.fields.get(name) {
            None => return 0.0,
            Some(value) => value,
        };
        let parsed = match value {
            FieldValue::Number(number) => *number,
            FieldValue::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        };
        if parsed.is_finite() {
            parsed
        } else {
            0.0
        }
    }
}

/// Strips the `nan` serialization sentinel from a textual value.
fn normalize_text(raw: &str) -> &str {
    if raw == NAN_SENTINEL {
        ""
    } else {
        raw
    }
}
