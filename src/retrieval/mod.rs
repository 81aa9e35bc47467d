// file: src/retrieval/mod.rs
// description: registry retrieval module exports
// reference: internal module structure

pub mod entrez;
pub mod literature;
pub mod variants;

pub use entrez::EntrezClient;
pub use literature::LiteratureRetriever;
pub use variants::{VariantBatch, VariantRetriever};
