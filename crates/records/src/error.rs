use thiserror::Error;

/// Errors raised while loading and normalizing record sources.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Unsupported data file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
