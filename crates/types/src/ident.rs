//! Identifier type shared by invoices, customers and products.
//!
//! Source files are free to encode an id as a JSON number, a JSON string or a
//! bare CSV cell, so identity is defined over the *string representation*:
//! `Ident::from("7")` equals the ident built from the JSON number `7`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// An entity identifier compared by its string representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ident(String);

impl Ident {
    /// Creates a new identifier from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds an identifier from a raw record value.
    ///
    /// Strings are taken verbatim; numbers and booleans use their canonical
    /// text form (`7` and `"7"` end up equal). `Null` and the empty string
    /// carry no identity and yield `None` — a blank CSV cell is a missing
    /// id, not an id.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(Self(s.clone())),
            other => Some(Self(other.to_string())),
        }
    }

    /// Returns the string representation of this identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Orders identifiers numerically when both parse as integers, falling
    /// back to lexicographic order. Used for stable menu listings where
    /// `2` should precede `10`.
    pub fn cmp_natural(&self, other: &Self) -> Ordering {
        match (self.0.parse::<i64>(), other.0.parse::<i64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => self.0.cmp(&other.0),
        }
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
