// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod retrieval;
pub mod summarize;
pub mod utils;

pub use config::{Config, EntrezConfig, ExportConfig, LlmConfig};
pub use error::{PipelineError, Result};
pub use exporter::{ReportExporter, ReportManifest};
pub use models::{AbstractRecord, EvidenceBundle, PipelineResult, VariantRecord};
pub use pipeline::{PipelineOrchestrator, Stage};
pub use retrieval::{EntrezClient, LiteratureRetriever, VariantBatch, VariantRetriever};
pub use summarize::{Summarizer, Summary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _stage = Stage::Search;
    }
}
