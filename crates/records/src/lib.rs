//! Record source abstractions for the billpress pipeline.
//!
//! Every input file — invoices, customers, products — is normalized into a
//! sequence of [`RawRecord`]s so that the rest of the engine never branches
//! on the origin format.
//!
//! ## Available sources
//!
//! - [`CsvRecordSource`]: flat tables, one record per row, field set taken
//!   from the header row
//! - [`JsonRecordSource`]: structured documents, top-level arrays yield one
//!   record per object, a single top-level object is wrapped in a
//!   one-element sequence
//!
//! ## Example
//!
//! ```ignore
//! use billpress_records::load_records;
//!
//! let records = load_records("data/invoice.csv")?;
//! for record in &records {
//!     println!("invoice {:?}", record.ident("invoice_id"));
//! }
//! ```

pub mod error;
pub mod record;

pub use error::RecordError;
pub use record::RawRecord;

use log::warn;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// The recognized source formats, fixed once per file at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Flat table: one record per row.
    Csv,
    /// Structured document: records are objects, line items may nest.
    Json,
}

impl SourceFormat {
    /// Determines the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, RecordError> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "json" => Ok(SourceFormat::Json),
            other => Err(RecordError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A source of uniform records.
///
/// Implementations read their backing file on every call; they hold no
/// parsed state, so a source value is cheap and reusable.
pub trait RecordSource: Send + Sync {
    /// Reads the whole source into a sequence of records. Pure read, no
    /// side effects.
    fn read(&self) -> Result<Vec<RawRecord>, RecordError>;

    /// The format this source was recognized as.
    fn format(&self) -> SourceFormat;

    /// A human-readable name for logging and error messages.
    fn name(&self) -> String;
}

/// Reads flat CSV tables into records.
///
/// The first row supplies the field names. Rows shorter than the header are
/// accepted; the missing fields are simply absent from the record. Cells are
/// always string-valued.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvRecordSource {
    fn read(&self) -> Result<Vec<RawRecord>, RecordError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| RecordError::Csv {
                path: self.path.display().to_string(),
                source: e,
            })?;

        let headers = reader
            .headers()
            .map_err(|e| RecordError::Csv {
                path: self.path.display().to_string(),
                source: e,
            })?
            .clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| RecordError::Csv {
                path: self.path.display().to_string(),
                source: e,
            })?;
            let mut fields = Map::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                fields.insert(header.to_string(), Value::String(cell.to_string()));
            }
            records.push(RawRecord::new(fields));
        }
        Ok(records)
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads structured JSON documents into records.
///
/// A top-level array yields one record per object entry; a single top-level
/// object is wrapped into a one-element sequence. Non-object entries carry no
/// fields and are skipped with a warning.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    path: PathBuf,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecordSource {
    fn read(&self) -> Result<Vec<RawRecord>, RecordError> {
        let text = fs::read_to_string(&self.path).map_err(|e| RecordError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        let value: Value = serde_json::from_str(&text).map_err(|e| RecordError::Json {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let entries = match value {
            Value::Array(entries) => entries,
            other => vec![other],
        };

        let mut records = Vec::new();
        for entry in &entries {
            match RawRecord::from_value(entry) {
                Some(record) => records.push(record),
                None => warn!(
                    "Skipping non-object entry in '{}': {}",
                    self.path.display(),
                    entry
                ),
            }
        }
        Ok(records)
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Opens the source matching the file's extension.
pub fn open(path: impl AsRef<Path>) -> Result<Box<dyn RecordSource>, RecordError> {
    let path = path.as_ref();
    match SourceFormat::from_path(path)? {
        SourceFormat::Csv => Ok(Box::new(CsvRecordSource::new(path))),
        SourceFormat::Json => Ok(Box::new(JsonRecordSource::new(path))),
    }
}

/// Loads a file straight into records: format detection plus a single read.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, RecordError> {
    open(path)?.read()
}
