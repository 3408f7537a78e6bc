use crate::error::RenderError;
use crate::types::PageSetup;

/// A trait for document renderers, abstracting the paged rendering target.
///
/// The pipeline hands a renderer the final composed markup plus the page
/// geometry and receives back the bytes of a finished document. Renderers
/// never see partial data; rendering is the last step of a run.
pub trait PagedRenderer: Send + Sync {
    /// Produces the binary document for a fully composed markup string.
    fn render(&self, markup: &str, setup: &PageSetup) -> Result<Vec<u8>, RenderError>;

    /// The file extension output files carry, without the leading dot.
    fn file_extension(&self) -> &'static str;

    /// A human-readable name for this renderer (for logging/debugging).
    fn name(&self) -> &'static str;
}
