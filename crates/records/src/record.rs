//! The uniform record type produced by every source format.

use billpress_types::Ident;
use serde_json::{Map, Value};

/// A uniform mapping view over one row (CSV) or one object (JSON) from any
/// input format. Field values keep their source type: CSV cells are always
/// strings, JSON values arrive as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Creates a record from a field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a record from a JSON value. Only objects carry fields; any
    /// other value yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|fields| Self(fields.clone()))
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Interprets a field as an identifier. Missing fields and JSON nulls
    /// carry no identity.
    pub fn ident(&self, field: &str) -> Option<Ident> {
        self.0.get(field).and_then(Ident::from_value)
    }

    /// Returns the display form of a field. Missing fields and nulls render
    /// as the empty string, never as an absent value.
    pub fn display(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Interprets a field as a number, accepting both JSON numbers and
    /// numeric strings (the CSV case).
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.0.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
