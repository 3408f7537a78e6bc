//! Typed views extracted from resolved reference records.

use billpress_records::RawRecord;
use log::warn;

/// Display name used when a product record has no usable `name` field.
pub const UNKNOWN_PRODUCT_NAME: &str = "unknown product";

/// A customer as the document composer consumes it.
///
/// Every field is always present: a field the source record lacks renders as
/// the empty string, never as an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerRecord {
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            name: record.display("name"),
            email: record.display("email"),
            phone: record.display("phone"),
            address: record.display("address"),
        }
    }
}

/// A product as line-item enrichment consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    /// Unit price, never negative.
    pub price: f64,
}

impl ProductRecord {
    /// Extracts the product view from a resolved record.
    ///
    /// A missing or empty name falls back to [`UNKNOWN_PRODUCT_NAME`]. An
    /// absent price reads as 0.00; a malformed or negative price also reads
    /// as 0.00 and is logged at warn level.
    pub fn from_record(record: &RawRecord) -> Self {
        let name = match record.display("name") {
            s if s.is_empty() => UNKNOWN_PRODUCT_NAME.to_string(),
            s => s,
        };

        let price = match record.number("price") {
            Some(p) if p >= 0.0 => p,
            Some(p) => {
                warn!("Negative price {} for product '{}', reading as 0.00", p, name);
                0.0
            }
            None => {
                if record.get("price").is_some() {
                    warn!("Malformed price for product '{}', reading as 0.00", name);
                }
                0.0
            }
        };

        Self { name, price }
    }
}
