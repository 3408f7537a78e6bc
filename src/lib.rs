//! # billpress
//!
//! An invoice generation engine. Give it a tabular data source (CSV rows
//! or nested JSON documents), reference files for customers and products,
//! and a markup template; it joins the three, splits line items into
//! pages, and renders a print-ready document.
//!
//! This crate is the user-facing facade: it re-exports the member crates
//! and the high-level pipeline API from `billpress-core`.
//!
//! ## Quick start
//!
//! ```no_run
//! use billpress::{Ident, PipelineBuilder};
//!
//! # fn main() -> Result<(), billpress::PipelineError> {
//! let pipeline = PipelineBuilder::new()
//!     .with_data_file("data/invoices.csv")
//!     .with_template_file("templates/invoice.html")
//!     .with_output_dir("output")
//!     .build()?;
//!
//! for id in pipeline.invoice_ids() {
//!     let path = pipeline.generate_to_dir(&id)?;
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

// Re-export member crates for stage-level access
pub use billpress_core::assemble;
pub use billpress_core::compose;
pub use billpress_core::paginate;
pub use billpress_core::records;
pub use billpress_core::render_core;
pub use billpress_core::render_html;
pub use billpress_core::resolve;
pub use billpress_core::types;

// Re-export the crates embedders pair with the API: `Ident` is
// serde-serializable, record values are `serde_json` values, and every
// error type is a thiserror enum
pub use serde;
pub use serde_json;
pub use thiserror;

// The high-level API
pub use billpress_core::{
    GeneratedDocument, Ident, PageSetup, PagedRenderer, PaperSize, Pipeline, PipelineBuilder,
    PipelineError, PrintHtmlRenderer, QuantityPolicy, RunConfig, SystemViewer, Viewer,
};
pub use billpress_core::{config, discover, error, pipeline, viewer};
