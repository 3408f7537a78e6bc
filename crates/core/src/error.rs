// src/error.rs
//! Defines the unified error type for all high-level pipeline operations.

use billpress_assemble::AssembleError;
use billpress_records::RecordError;
use billpress_render_core::RenderError;
use billpress_types::Ident;
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
///
/// Every fatal condition surfaces here exactly once, at the orchestration
/// boundary. A run that fails writes no output file at all.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record source error: {0}")]
    Record(#[from] RecordError),
    #[error("Invoice assembly error: {0}")]
    Assemble(#[from] AssembleError),
    #[error("Invoice '{0}' does not name a customer")]
    MissingCustomerId(Ident),
    #[error("Customer '{0}' was not found in any reference source")]
    CustomerNotFound(Ident),
    #[error("Invoice '{0}' has no renderable line items")]
    EmptyInvoice(Ident),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}
