//! Print-ready HTML rendering backend.
//!
//! The default [`PagedRenderer`] implementation: it injects the print
//! stylesheet (page geometry, page-break rules, table header repetition)
//! into the composed markup and emits the result as the final document
//! bytes. A PDF rasterizer would implement the same trait; this backend
//! keeps the output inspectable and printable by any browser.
//!
//! [`PagedRenderer`]: billpress_render_core::PagedRenderer

mod renderer;

pub use renderer::PrintHtmlRenderer;
