//! Invoice assembly for the billpress pipeline.
//!
//! This crate rebuilds one logical invoice from a normalized record
//! sequence and joins its line items against the product reference:
//!
//! - **`draft`**: shape-aware reconstruction (flat per-row encoding vs.
//!   nested `items` encoding) into an [`InvoiceDraft`]
//! - **`enrich`**: product resolution, quantity interpretation and line
//!   totals, producing the final [`LineItem`] list
//!
//! ## Example
//!
//! ```ignore
//! use billpress_assemble::{assemble, enrich, QuantityPolicy, SourceShape};
//!
//! let draft = assemble(&records, &invoice_id, SourceShape::Flat)?;
//! let items = enrich(&draft.raw_items, &resolver, QuantityPolicy::default())?;
//! ```

pub mod draft;
pub mod enrich;
pub mod error;

pub use draft::{InvoiceDraft, InvoiceHeader, RawLineItem, SourceShape, assemble, list_invoice_ids};
pub use enrich::{LineItem, QuantityPolicy, enrich};
pub use error::AssembleError;
