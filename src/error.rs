// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{db} search failed: {message}")]
    Search { db: String, message: String },

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Record extraction failed for id {id}: {message}")]
    Extraction { id: String, message: String },

    #[error("Backend completion failed: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),
}
