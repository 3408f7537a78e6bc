//! Reference resolution for the billpress pipeline.
//!
//! Customers and products live in their own reference files, one or more per
//! kind. This crate owns the lookup policy: candidate sources are kept in a
//! fixed priority order (flat CSV sources before structured JSON sources) and
//! a lookup returns the first record whose id field matches. A later source
//! never shadows an earlier one.
//!
//! A failed lookup is a plain `None`; the caller decides whether that is
//! fatal (a missing customer) or not (a missing product drops the line item).
//!
//! ## Example
//!
//! ```ignore
//! use billpress_resolve::{RefKind, ReferenceResolver};
//! use billpress_types::Ident;
//!
//! let resolver = ReferenceResolver::from_data_dir("data")?;
//! if let Some(customer) = resolver.customer(&Ident::new("9")) {
//!     println!("billing {}", customer.name);
//! }
//! ```

pub mod resolver;
pub mod views;

pub use resolver::{RefKind, ReferenceResolver, ReferenceSet};
pub use views::{CustomerRecord, ProductRecord, UNKNOWN_PRODUCT_NAME};
