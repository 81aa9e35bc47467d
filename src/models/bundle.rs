// file: src/models/bundle.rs
// description: per-run evidence container and final pipeline result
// reference: internal data structures

use crate::models::{AbstractRecord, VariantRecord};
use serde::{Deserialize, Serialize};

/// Merged evidence for one gene query. Constructed per run, owned by the
/// orchestrator, discarded after summarization.
#[derive(Debug, Clone)]
pub struct EvidenceBundle {
    pub gene: String,
    pub abstracts: Vec<AbstractRecord>,
    pub variants: Vec<VariantRecord>,
}

impl EvidenceBundle {
    pub fn new(
        gene: impl Into<String>,
        abstracts: Vec<AbstractRecord>,
        variants: Vec<VariantRecord>,
    ) -> Self {
        Self {
            gene: gene.into(),
            abstracts,
            variants,
        }
    }

    /// True when neither registry produced usable evidence.
    pub fn is_empty(&self) -> bool {
        self.abstracts.is_empty() && self.variants.is_empty()
    }
}

/// Final output of one pipeline run; ownership transfers to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub gene: String,
    pub variants: Vec<VariantRecord>,
    pub narrative: String,
    pub warnings: Vec<String>,
}
