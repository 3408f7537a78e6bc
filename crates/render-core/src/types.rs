//! Page geometry passed to every renderer.

use std::fmt;

/// The paper sizes a renderer's `@page` rule understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// The CSS `@page size` keyword for this paper size.
    pub fn css_name(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "letter",
            PaperSize::Legal => "legal",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Physical page configuration handed to a [`PagedRenderer`].
///
/// [`PagedRenderer`]: crate::PagedRenderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSetup {
    pub paper_size: PaperSize,
    /// CSS margin shorthand for the `@page` rule.
    pub margins: String,
    /// Base font stack for the document body.
    pub font_family: String,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            margins: "2cm 2cm 3cm 2cm".to_string(),
            font_family: "'DejaVu Sans', Arial, sans-serif".to_string(),
        }
    }
}
