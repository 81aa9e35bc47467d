// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use gene_summarize::utils::logging::{format_success, format_warning};
use gene_summarize::{
    Config, EntrezClient, LiteratureRetriever, PipelineOrchestrator, ReportExporter, Stage,
    VariantRetriever, summarize,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gene_summarize")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Gene-mutation evidence reports from PubMed and ClinVar", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: retrieve, filter, summarize, export
    Report {
        /// Gene symbol to query (e.g. BRCA1)
        gene: String,

        #[arg(long)]
        no_export: bool,
    },

    /// Fetch and display the filtered variant table only
    Variants {
        gene: String,
    },

    /// Fetch and display literature abstracts only
    Abstracts {
        gene: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    gene_summarize::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Gene Summarize Evidence Pipeline");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    match cli.command {
        Commands::Report { gene, no_export } => {
            cmd_report(&config, &gene, no_export).await?;
        }
        Commands::Variants { gene } => {
            cmd_variants(&config, &gene).await?;
        }
        Commands::Abstracts { gene } => {
            cmd_abstracts(&config, &gene).await?;
        }
    }

    Ok(())
}

async fn cmd_report(config: &Config, gene: &str, no_export: bool) -> Result<()> {
    info!("Building mutation report for {}", gene);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("spinner template is valid"),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(format!("aggregating evidence for {gene}"));

    let orchestrator = PipelineOrchestrator::new(config);
    let result = orchestrator.run(gene).await;
    spinner.finish_and_clear();

    let result = result.with_context(|| format!("Pipeline failed for {gene}"))?;

    println!("\n{}", "=".repeat(80));
    println!("Mutation report for {}\n", result.gene);
    println!("{}", summarize::variant_table(&result.variants));
    println!("Narrative:\n{}\n", result.narrative);

    for warning in &result.warnings {
        println!("{}", format_warning(warning));
    }
    println!("{}", "=".repeat(80));

    if no_export {
        info!("Export skipped (--no-export)");
        return Ok(());
    }

    info!("stage {}: writing report files", Stage::Persist);
    let exporter = ReportExporter::new(config.export.output_dir.clone())
        .context("Failed to create report exporter")?;
    let manifest = exporter.export(&result).context("Failed to export report")?;

    println!(
        "{}",
        format_success(&format!(
            "report written: {} and {}",
            manifest.variants_path.display(),
            manifest.summary_path.display()
        ))
    );
    info!("stage {}: report complete for {}", Stage::Done, result.gene);

    Ok(())
}

async fn cmd_variants(config: &Config, gene: &str) -> Result<()> {
    info!("Fetching variants for {}", gene);

    let entrez = EntrezClient::new(config.entrez.clone());
    let retriever = VariantRetriever::new(entrez, &config.entrez);
    let batch = retriever
        .fetch_variants(gene)
        .await
        .with_context(|| format!("Variant fetch failed for {gene}"))?;

    println!("\n{}", "=".repeat(80));
    println!("Reportable variants for {gene}\n");
    println!("{}", summarize::variant_table(&batch.records));
    for diagnostic in &batch.skipped {
        println!("{}", format_warning(diagnostic));
    }
    println!("{}", "=".repeat(80));

    Ok(())
}

async fn cmd_abstracts(config: &Config, gene: &str) -> Result<()> {
    info!("Fetching abstracts for {}", gene);

    let entrez = EntrezClient::new(config.entrez.clone());
    let retriever = LiteratureRetriever::new(entrez, &config.entrez);
    let abstracts = retriever
        .fetch_abstracts(gene)
        .await
        .with_context(|| format!("Literature fetch failed for {gene}"))?;

    println!("\n{}", "=".repeat(80));
    if abstracts.is_empty() {
        println!("No abstracts found for {gene}");
    } else {
        println!("Abstracts for {gene} ({} found)\n", abstracts.len());
        for (idx, record) in abstracts.iter().enumerate() {
            println!("{}. {}", idx + 1, record.title);
            println!("   {}\n", record.body);
        }
    }
    println!("{}", "=".repeat(80));

    Ok(())
}
