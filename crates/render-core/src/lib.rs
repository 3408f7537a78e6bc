//! Core rendering abstractions for paged invoice documents.
//!
//! This crate provides the seam between the composition pipeline and its
//! rendering backends:
//! - `PagedRenderer` trait for turning composed markup into document bytes
//! - `PageSetup` page geometry shared by all backends
//! - Error types for rendering operations
//!
//! Rasterization itself lives behind the trait; the pipeline only ever
//! sees markup in, bytes out.

mod error;
mod traits;
mod types;

pub use error::RenderError;
pub use traits::PagedRenderer;
pub use types::{PageSetup, PaperSize};
