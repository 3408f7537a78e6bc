use billpress_render_core::{PageSetup, PagedRenderer, RenderError};
use log::debug;

/// Renders composed markup to a self-contained, print-ready HTML document.
///
/// The print stylesheet is injected into the document `<head>` (or
/// prepended when the markup has none), so the `.page-break` and table
/// header-group rules produced by the composer take effect when the
/// document is printed or handed to a rasterizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintHtmlRenderer;

impl PrintHtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PagedRenderer for PrintHtmlRenderer {
    fn render(&self, markup: &str, setup: &PageSetup) -> Result<Vec<u8>, RenderError> {
        let style_block = format!("<style>{}</style>\n", print_stylesheet(setup));

        let document = match markup.find("</head>") {
            Some(position) => {
                let mut document = String::with_capacity(markup.len() + style_block.len());
                document.push_str(&markup[..position]);
                document.push_str(&style_block);
                document.push_str(&markup[position..]);
                document
            }
            None => {
                debug!("Markup has no <head>; prepending the print stylesheet");
                format!("{}{}", style_block, markup)
            }
        };

        Ok(document.into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn name(&self) -> &'static str {
        "print-html"
    }
}

/// The pagination-aware stylesheet: page geometry from the setup, forced
/// breaks on `.page-break`, repeated table header groups, and row/table
/// break avoidance.
fn print_stylesheet(setup: &PageSetup) -> String {
    format!(
        r#"
        @page {{
            size: {size};
            margin: {margins};
        }}

        body {{
            font-family: {font_family};
        }}

        .page-break {{
            page-break-before: always;
        }}

        table {{
            page-break-inside: avoid;
        }}

        thead {{
            display: table-header-group;
        }}

        tbody tr {{
            page-break-inside: avoid;
        }}

        .total-section {{
            page-break-inside: avoid;
        }}
    "#,
        size = setup.paper_size.css_name(),
        margins = setup.margins,
        font_family = setup.font_family,
    )
}
