// src/config.rs
//! The immutable configuration for a generation run.

use crate::error::PipelineError;
use billpress_assemble::QuantityPolicy;
use billpress_compose::DEFAULT_CURRENCY;
use billpress_paginate::DEFAULT_PAGE_CAPACITY;
use billpress_render_core::PageSetup;
use std::path::PathBuf;

/// Everything one generation run needs to know, fixed up front.
///
/// There is no ambient state. The CLI (or an embedding application) fills
/// one `RunConfig` and hands it to [`PipelineBuilder`](crate::pipeline::PipelineBuilder);
/// the pipeline never reads configuration from anywhere else.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The invoice data source (a `.csv` or `.json` file).
    pub data_file: PathBuf,
    /// The markup template containing `{{...}}` placeholders.
    pub template_file: PathBuf,
    /// Directory generated documents are written into.
    pub output_dir: PathBuf,
    /// Line items per page.
    pub page_capacity: usize,
    /// Currency marker appended to per-item amount cells.
    pub currency: String,
    /// How malformed quantity values are treated.
    pub quantity_policy: QuantityPolicy,
    /// Page geometry handed to the renderer.
    pub page_setup: PageSetup,
    /// Launch the system viewer on the written document.
    pub open_after_render: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::new(),
            template_file: PathBuf::new(),
            output_dir: PathBuf::from("output"),
            page_capacity: DEFAULT_PAGE_CAPACITY,
            currency: DEFAULT_CURRENCY.to_string(),
            quantity_policy: QuantityPolicy::default(),
            page_setup: PageSetup::default(),
            open_after_render: false,
        }
    }
}

impl RunConfig {
    /// Checks the parts of the configuration that can be judged without
    /// touching the filesystem. File existence is checked when the
    /// pipeline is built.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(PipelineError::Config("no data file configured".into()));
        }
        if self.template_file.as_os_str().is_empty() {
            return Err(PipelineError::Config("no template file configured".into()));
        }
        if self.page_capacity == 0 {
            return Err(PipelineError::Config(
                "page capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
