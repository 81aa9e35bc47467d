// file: src/pipeline/orchestrator.rs
// description: coordinates retrieval, assembly and summarization for one gene query
// reference: staged pipeline with per-stage failure isolation

use crate::config::Config;
use crate::error::Result;
use crate::models::{EvidenceBundle, PipelineResult};
use crate::retrieval::{EntrezClient, LiteratureRetriever, VariantRetriever};
use crate::summarize::Summarizer;
use std::fmt;
use std::time::Instant;
use tracing::{error, info, warn};

/// Pipeline stages in execution order. `Persist` belongs to the exporting
/// caller; `Failed` is reachable from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Search,
    Filter,
    Assemble,
    Summarize,
    Persist,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Search => "search",
            Stage::Filter => "filter",
            Stage::Assemble => "assemble",
            Stage::Summarize => "summarize",
            Stage::Persist => "persist",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Runs the evidence aggregation pipeline for one gene. Each run is
/// self-contained: no state survives between queries.
pub struct PipelineOrchestrator {
    literature: LiteratureRetriever,
    variants: VariantRetriever,
    summarizer: Summarizer,
}

impl PipelineOrchestrator {
    pub fn new(config: &Config) -> Self {
        let entrez = EntrezClient::new(config.entrez.clone());
        Self {
            literature: LiteratureRetriever::new(entrez.clone(), &config.entrez),
            variants: VariantRetriever::new(entrez, &config.entrez),
            summarizer: Summarizer::new(config.llm.clone()),
        }
    }

    /// Search -> Filter -> Assemble -> Summarize. A retrieval failure
    /// aborts the run with no partial output; evidence absence and backend
    /// failures degrade to warnings instead.
    pub async fn run(&self, gene: &str) -> Result<PipelineResult> {
        let started = Instant::now();

        info!("stage {}: querying registries for {}", Stage::Search, gene);
        let search = tokio::try_join!(
            self.literature.fetch_abstracts(gene),
            self.variants.fetch_variants(gene),
        );
        let (abstracts, batch) = match search {
            Ok(outputs) => outputs,
            Err(e) => {
                error!("stage {}: {}", Stage::Failed, e);
                return Err(e);
            }
        };

        info!("stage {}: applying evidence checks", Stage::Filter);
        let mut warnings = batch.skipped;
        if abstracts.is_empty() {
            warn!("no abstracts found for {}", gene);
            warnings.push(format!("no abstracts found for {gene}"));
        }
        if batch.records.is_empty() {
            warn!("no pathogenic or likely pathogenic variants found for {}", gene);
            warnings.push(format!(
                "no pathogenic or likely pathogenic variants found for {gene}"
            ));
        }

        info!("stage {}: merging evidence", Stage::Assemble);
        let bundle = EvidenceBundle::new(gene, abstracts, batch.records);

        info!("stage {}: generating narrative", Stage::Summarize);
        let summary = self.summarizer.summarize(&bundle).await;
        if let Some(diagnostic) = summary.diagnostic {
            warnings.push(diagnostic);
        }

        let result = PipelineResult {
            gene: bundle.gene,
            variants: bundle.variants,
            narrative: summary.narrative,
            warnings,
        };

        self.log_run_summary(&result, started.elapsed().as_secs_f64());
        Ok(result)
    }

    fn log_run_summary(&self, result: &PipelineResult, elapsed_secs: f64) {
        info!("=== Pipeline Run Summary ===");
        info!("Gene: {}", result.gene);
        info!("Reportable variants: {}", result.variants.len());
        info!("Warnings: {}", result.warnings.len());
        info!("Duration: {:.2}s", elapsed_secs);
        info!("============================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_config() -> Config {
        let mut config = Config::default_config();
        config.llm.api_key = Some("gsk_test".to_string());
        config
    }

    #[test]
    fn test_orchestrator_creation() {
        let config = test_config();
        let _orchestrator = PipelineOrchestrator::new(&config);
    }

    #[test]
    fn test_stage_order_display() {
        let stages = [
            Stage::Search,
            Stage::Filter,
            Stage::Assemble,
            Stage::Summarize,
            Stage::Persist,
            Stage::Done,
        ];
        let names: Vec<String> = stages.iter().map(Stage::to_string).collect();
        assert_eq!(
            names,
            vec!["search", "filter", "assemble", "summarize", "persist", "done"]
        );
        assert_eq!(Stage::Failed.to_string(), "failed");
    }
}
