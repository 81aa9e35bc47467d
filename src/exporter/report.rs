// file: src/exporter/report.rs
// description: csv and plain-text report export keyed by gene symbol

use crate::error::Result;
use crate::models::PipelineResult;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ReportManifest {
    pub gene: String,
    pub variants_path: PathBuf,
    pub summary_path: PathBuf,
    pub variant_count: usize,
    pub exported_at: String,
}

impl ReportExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes the filtered variant table as `{GENE}_variants.csv` and the
    /// narrative as `{GENE}_summary.txt`.
    pub fn export(&self, result: &PipelineResult) -> Result<ReportManifest> {
        let variants_path = self.output_dir.join(format!("{}_variants.csv", result.gene));
        let summary_path = self.output_dir.join(format!("{}_summary.txt", result.gene));

        fs::write(&variants_path, render_csv(result))?;
        fs::write(&summary_path, &result.narrative)?;

        info!(
            "exported {} variant(s) and summary for {} to {}",
            result.variants.len(),
            result.gene,
            self.output_dir.display()
        );

        Ok(ReportManifest {
            gene: result.gene.clone(),
            variants_path,
            summary_path,
            variant_count: result.variants.len(),
            exported_at: Utc::now().to_rfc3339(),
        })
    }
}

fn render_csv(result: &PipelineResult) -> String {
    let mut csv = String::from("hgvs_name,variant_type,classification,condition\n");
    for variant in &result.variants {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&variant.hgvs_name),
            csv_field(&variant.variant_type),
            csv_field(&variant.classification),
            csv_field(&variant.condition),
        ));
    }
    csv
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VariantRecord;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_result() -> PipelineResult {
        PipelineResult {
            gene: "BRCA1".to_string(),
            variants: vec![VariantRecord {
                hgvs_name: "NM_007294.4(BRCA1):c.68_69del".to_string(),
                variant_type: "Deletion".to_string(),
                classification: "Pathogenic".to_string(),
                condition: "Breast-ovarian cancer, familial, 1".to_string(),
            }],
            narrative: "BRCA1 shows a pattern of truncating variants.".to_string(),
            warnings: vec![],
        }
    }

    #[test]
    fn test_export_writes_both_files() {
        let dir = tempdir().unwrap();
        let exporter = ReportExporter::new(dir.path()).unwrap();

        let manifest = exporter.export(&sample_result()).unwrap();
        assert_eq!(manifest.variant_count, 1);
        assert!(manifest.variants_path.exists());
        assert!(manifest.summary_path.exists());

        let summary = fs::read_to_string(&manifest.summary_path).unwrap();
        assert_eq!(summary, "BRCA1 shows a pattern of truncating variants.");
    }

    #[test]
    fn test_csv_has_header_and_quoted_fields() {
        let csv = render_csv(&sample_result());
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "hgvs_name,variant_type,classification,condition"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"Breast-ovarian cancer, familial, 1\""));
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_empty_variant_list_writes_header_only_csv() {
        let mut result = sample_result();
        result.variants.clear();
        let csv = render_csv(&result);
        assert_eq!(csv, "hgvs_name,variant_type,classification,condition\n");
    }
}
