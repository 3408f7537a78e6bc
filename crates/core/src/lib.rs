//! # billpress-core
//!
//! Integration layer of the billpress invoice engine.
//!
//! The member crates each own one stage of the chain; this crate wires
//! them together:
//! - **config**: the immutable per-run configuration
//! - **discover**: filesystem discovery for the interactive selection flow
//! - **pipeline**: builder, end-to-end generation, and document output
//! - **viewer**: launching the platform viewer on a written document
//! - **error**: the unified error type for pipeline operations
//!
//! Rendering happens last: a failed run never leaves a partial output
//! file behind.

// Re-export member crates for embedders that need stage-level access
pub use billpress_assemble as assemble;
pub use billpress_compose as compose;
pub use billpress_paginate as paginate;
pub use billpress_records as records;
pub use billpress_render_core as render_core;
pub use billpress_render_html as render_html;
pub use billpress_resolve as resolve;
pub use billpress_types as types;

pub mod config;
pub mod discover;
pub mod error;
pub mod pipeline;
pub mod viewer;

// Re-export the types most embedders touch
pub use billpress_assemble::QuantityPolicy;
pub use billpress_render_core::{PageSetup, PagedRenderer, PaperSize};
pub use billpress_render_html::PrintHtmlRenderer;
pub use billpress_types::Ident;
pub use config::RunConfig;
pub use error::PipelineError;
pub use pipeline::{GeneratedDocument, Pipeline, PipelineBuilder};
pub use viewer::{SystemViewer, Viewer};
