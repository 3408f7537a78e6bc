//! Reconstructing one logical invoice out of a record sequence.
//!
//! The two source encodings produce the same draft:
//!
//! - **Flat**: every record is one line item; records sharing an
//!   `invoice_id` belong to the same invoice, and the header fields come
//!   from the first matching record.
//! - **Nested**: one record per invoice, carrying its line items in an
//!   `items` array.

use crate::error::AssembleError;
use billpress_records::{RawRecord, SourceFormat};
use billpress_types::Ident;
use log::warn;
use serde_json::Value;

/// How the invoice source encodes line items. Fixed once at load time from
/// the source format, never re-derived per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    /// One record per line item, grouped by `invoice_id`.
    Flat,
    /// One record per invoice with an embedded `items` array.
    Nested,
}

impl SourceShape {
    pub fn from_format(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Csv => SourceShape::Flat,
            SourceFormat::Json => SourceShape::Nested,
        }
    }
}

/// The header fields shared by every line item of an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceHeader {
    pub invoice_id: Ident,
    /// Absent when the source record carries no usable `customer_id`; the
    /// caller treats that as fatal.
    pub customer_id: Option<Ident>,
    pub date: String,
}

/// A line item as it appears in the source, before enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLineItem {
    /// Absent when the record has no usable `product_id`; such an item can
    /// never resolve and is dropped during enrichment.
    pub product_id: Option<Ident>,
    /// The quantity value exactly as the source encodes it. Interpretation
    /// is deferred to enrichment, where the quantity policy applies.
    pub quantity: Option<Value>,
}

impl RawLineItem {
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            product_id: record.ident("product_id"),
            quantity: record.get("quantity").cloned(),
        }
    }
}

/// One reconstructed invoice: header plus raw line items, pre-enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub header: InvoiceHeader,
    pub raw_items: Vec<RawLineItem>,
}

/// Reconstructs the invoice with `target_id` from a record sequence.
///
/// Flat shape: every record whose `invoice_id` stringifies equal to the
/// target contributes one line item; `date` and `customer_id` are taken
/// from the first matching record only. Nested shape: the first record
/// whose `invoice_id` matches supplies both the header fields and the
/// `items` array (missing array reads as empty).
pub fn assemble(
    records: &[RawRecord],
    target_id: &Ident,
    shape: SourceShape,
) -> Result<InvoiceDraft, AssembleError> {
    match shape {
        SourceShape::Flat => assemble_flat(records, target_id),
        SourceShape::Nested => assemble_nested(records, target_id),
    }
}

fn assemble_flat(records: &[RawRecord], target_id: &Ident) -> Result<InvoiceDraft, AssembleError> {
    let matching: Vec<&RawRecord> = records
        .iter()
        .filter(|record| record.ident("invoice_id").as_ref() == Some(target_id))
        .collect();

    let first = matching
        .first()
        .ok_or_else(|| AssembleError::InvoiceNotFound(target_id.clone()))?;

    let header = InvoiceHeader {
        invoice_id: target_id.clone(),
        customer_id: first.ident("customer_id"),
        date: first.display("date"),
    };

    let raw_items = matching
        .into_iter()
        .map(RawLineItem::from_record)
        .collect();
    Ok(InvoiceDraft { header, raw_items })
}

fn assemble_nested(records: &[RawRecord], target_id: &Ident) -> Result<InvoiceDraft, AssembleError> {
    let record = records
        .iter()
        .find(|record| record.ident("invoice_id").as_ref() == Some(target_id))
        .ok_or_else(|| AssembleError::InvoiceNotFound(target_id.clone()))?;

    let header = InvoiceHeader {
        invoice_id: target_id.clone(),
        customer_id: record.ident("customer_id"),
        date: record.display("date"),
    };

    let raw_items = match record.get("items") {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match RawRecord::from_value(entry) {
                Some(item) => Some(RawLineItem::from_record(&item)),
                None => {
                    warn!(
                        "Skipping non-object line item in invoice '{}': {}",
                        target_id, entry
                    );
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(
                "Invoice '{}' has a non-array 'items' field ({}), reading as empty",
                target_id, other
            );
            Vec::new()
        }
        None => Vec::new(),
    };

    Ok(InvoiceDraft { header, raw_items })
}

/// Lists the distinct invoice ids present in a record sequence, in natural
/// order (numeric where both ids parse as integers). This drives the
/// invoice selection menu.
pub fn list_invoice_ids(records: &[RawRecord]) -> Vec<Ident> {
    let mut ids: Vec<Ident> = records
        .iter()
        .filter_map(|record| record.ident("invoice_id"))
        .collect();
    ids.sort_by(|a, b| a.cmp_natural(b));
    ids.dedup();
    ids
}
