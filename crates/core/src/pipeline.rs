// src/pipeline.rs
//! The end-to-end generation pipeline.
//!
//! A [`Pipeline`] owns everything a run needs: the parsed record sequence,
//! the reference resolver, the template, and a renderer. Building one is
//! where all input files are read; generating an invoice afterwards touches
//! the filesystem only when the caller asks for the document to be written.

use crate::config::RunConfig;
use crate::error::PipelineError;
use billpress_assemble::{QuantityPolicy, SourceShape, assemble, enrich, list_invoice_ids};
use billpress_compose::{ComposeOptions, Template, compose};
use billpress_paginate::{grand_total, paginate};
use billpress_records::{RawRecord, SourceFormat, load_records};
use billpress_render_core::PagedRenderer;
use billpress_render_html::PrintHtmlRenderer;
use billpress_resolve::ReferenceResolver;
use billpress_types::Ident;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A builder for creating a [`Pipeline`].
pub struct PipelineBuilder {
    config: RunConfig,
    renderer: Option<Box<dyn PagedRenderer>>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            config: RunConfig::default(),
            renderer: None,
        }
    }
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration in one step.
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the invoice data source. The source shape (flat rows or nested
    /// documents) is inferred from the file extension.
    pub fn with_data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.data_file = path.as_ref().to_path_buf();
        self
    }

    /// Sets the markup template file.
    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.template_file = path.as_ref().to_path_buf();
        self
    }

    /// Sets the directory generated documents are written into.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Sets how many line items fit on one page.
    pub fn with_page_capacity(mut self, capacity: usize) -> Self {
        self.config.page_capacity = capacity;
        self
    }

    /// Sets the currency marker appended to amount cells.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.config.currency = currency.into();
        self
    }

    /// Selects how malformed quantities are treated.
    pub fn with_quantity_policy(mut self, policy: QuantityPolicy) -> Self {
        self.config.quantity_policy = policy;
        self
    }

    /// Replaces the default renderer with a custom backend.
    pub fn with_renderer(mut self, renderer: Box<dyn PagedRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Consumes the builder, reads all input files, and creates the
    /// [`Pipeline`]. Reference sources are loaded from the directory the
    /// data file lives in.
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        self.config.validate()?;

        let format = SourceFormat::from_path(&self.config.data_file)?;
        let shape = SourceShape::from_format(format);
        let records = load_records(&self.config.data_file)?;

        let reference_dir = self
            .config
            .data_file
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let resolver = ReferenceResolver::from_data_dir(reference_dir)?;

        let template_path = &self.config.template_file;
        let template_source = fs::read_to_string(template_path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!(
                    "Failed to read template from '{}': {}",
                    template_path.display(),
                    e
                ),
            ))
        })?;
        let template = Template::new(template_source);

        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(PrintHtmlRenderer::new()));

        info!(
            "Pipeline ready: {} records from '{}', renderer '{}'",
            records.len(),
            self.config.data_file.display(),
            renderer.name()
        );

        Ok(Pipeline {
            config: self.config,
            shape,
            records,
            resolver,
            template,
            renderer,
        })
    }
}

/// A fully loaded generation pipeline.
pub struct Pipeline {
    config: RunConfig,
    shape: SourceShape,
    records: Vec<RawRecord>,
    resolver: ReferenceResolver,
    template: Template,
    renderer: Box<dyn PagedRenderer>,
}

impl Pipeline {
    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Distinct invoice identifiers present in the data source, in natural
    /// order. This is the menu the CLI offers for selection.
    pub fn invoice_ids(&self) -> Vec<Ident> {
        list_invoice_ids(&self.records)
    }

    /// Runs the full chain for one invoice: assemble, resolve, enrich,
    /// paginate, compose, render. Nothing is written to disk; the returned
    /// document carries the rendered bytes.
    pub fn generate(&self, invoice_id: &Ident) -> Result<GeneratedDocument, PipelineError> {
        info!(
            "Generating invoice '{}' from '{}'",
            invoice_id,
            self.config.data_file.display()
        );

        let draft = assemble(&self.records, invoice_id, self.shape)?;

        let customer_id = draft
            .header
            .customer_id
            .as_ref()
            .ok_or_else(|| PipelineError::MissingCustomerId(invoice_id.clone()))?;
        let customer = self
            .resolver
            .customer(customer_id)
            .ok_or_else(|| PipelineError::CustomerNotFound(customer_id.clone()))?;

        let items = enrich(&draft.raw_items, &self.resolver, self.config.quantity_policy)?;
        if items.is_empty() {
            return Err(PipelineError::EmptyInvoice(invoice_id.clone()));
        }

        let total = grand_total(&items);
        let pages = paginate(&items, self.config.page_capacity);
        debug!(
            "Invoice '{}': {} items over {} pages, total {:.2}",
            invoice_id,
            items.len(),
            pages.len(),
            total
        );

        let options = ComposeOptions {
            currency: self.config.currency.clone(),
        };
        let markup = compose(&self.template, &draft.header, &customer, &pages, total, &options);

        let bytes = self.renderer.render(&markup, &self.config.page_setup)?;

        Ok(GeneratedDocument {
            invoice_id: invoice_id.clone(),
            bytes,
            extension: self.renderer.file_extension(),
        })
    }

    /// Generates one invoice and writes it into the configured output
    /// directory, returning the written path.
    pub fn generate_to_dir(&self, invoice_id: &Ident) -> Result<PathBuf, PipelineError> {
        let document = self.generate(invoice_id)?;
        document.write_to(&self.config.output_dir)
    }
}

/// A rendered document held in memory, ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    invoice_id: Ident,
    bytes: Vec<u8>,
    extension: &'static str,
}

impl GeneratedDocument {
    /// The invoice this document was generated for.
    pub fn invoice_id(&self) -> &Ident {
        &self.invoice_id
    }

    /// The rendered document body.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Deterministic output name: `invoice_<id>.<ext>`, with the identifier
    /// slugified so it is always filesystem-safe.
    pub fn file_name(&self) -> String {
        let mut stem = slug::slugify(self.invoice_id.as_str());
        if stem.is_empty() {
            stem = "untitled".to_string();
        }
        format!("invoice_{}.{}", stem, self.extension)
    }

    /// Creates `dir` if needed and writes the document under its
    /// deterministic name. This is the pipeline's only write, and it
    /// happens after every fallible step has already succeeded.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, PipelineError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, &self.bytes)?;
        info!("Wrote '{}' ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}
