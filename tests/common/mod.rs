pub mod fixtures;
pub mod markup_assertions;

use billpress::{Ident, PipelineBuilder, QuantityPolicy};
use std::fs;
use std::path::{Path, PathBuf};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A generated document read back from disk, with helper methods.
#[derive(Debug)]
pub struct GeneratedHtml {
    pub path: PathBuf,
    pub markup: String,
}

impl GeneratedHtml {
    pub fn from_path(path: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let markup = fs::read_to_string(&path)?;
        Ok(Self { path, markup })
    }

    /// Pages are delimited by explicit break divs; one page means zero
    /// breaks.
    pub fn page_count(&self) -> usize {
        self.markup.matches("<div class=\"page-break\"></div>").count() + 1
    }

    pub fn occurrences(&self, needle: &str) -> usize {
        self.markup.matches(needle).count()
    }
}

/// Generates one invoice end-to-end from a prepared fixture directory,
/// writing into `<dir>/output`.
pub fn generate_invoice(
    dir: &Path,
    data_file: &str,
    invoice_id: &str,
) -> Result<GeneratedHtml, Box<dyn std::error::Error>> {
    generate_invoice_with(dir, data_file, invoice_id, QuantityPolicy::Lenient)
}

/// Same as [`generate_invoice`] but with an explicit quantity policy.
pub fn generate_invoice_with(
    dir: &Path,
    data_file: &str,
    invoice_id: &str,
    policy: QuantityPolicy,
) -> Result<GeneratedHtml, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new()
        .with_data_file(dir.join(data_file))
        .with_template_file(dir.join("invoice.html"))
        .with_output_dir(dir.join("output"))
        .with_quantity_policy(policy)
        .build()?;
    let path = pipeline.generate_to_dir(&Ident::new(invoice_id))?;
    GeneratedHtml::from_path(path)
}
