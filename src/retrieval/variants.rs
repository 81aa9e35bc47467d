// file: src/retrieval/variants.rs
// description: ClinVar variant retrieval, field extraction and classification filtering
// reference: declarative path-based extraction over esummary documents

use crate::config::EntrezConfig;
use crate::error::{PipelineError, Result};
use crate::models::{UNKNOWN, VariantRecord};
use crate::retrieval::entrez::EntrezClient;
use serde_json::Value;
use tracing::{debug, info, warn};

/// One step of a summary-document path.
#[derive(Debug, Clone, Copy)]
enum PathStep {
    Key(&'static str),
    First,
}

use PathStep::{First, Key};

/// Field-extraction table: every record field names its path into the
/// summary document. A path that dead-ends yields the "Unknown" sentinel
/// for that field alone.
const HGVS_NAME: &[PathStep] = &[Key("title")];
const VARIANT_TYPE: &[PathStep] = &[Key("variation_set"), First, Key("variant_type")];
const CLASSIFICATION: &[PathStep] = &[Key("germline_classification"), Key("description")];
const CONDITION: &[PathStep] = &[
    Key("germline_classification"),
    Key("trait_set"),
    First,
    Key("trait_name"),
];

/// Output of one variant fetch: the filtered records plus a diagnostic per
/// skipped ID.
#[derive(Debug, Default)]
pub struct VariantBatch {
    pub records: Vec<VariantRecord>,
    pub skipped: Vec<String>,
}

pub struct VariantRetriever {
    entrez: EntrezClient,
    db: String,
    retmax: usize,
}

impl VariantRetriever {
    pub fn new(entrez: EntrezClient, config: &EntrezConfig) -> Self {
        Self {
            entrez,
            db: config.variant_db.clone(),
            retmax: config.variant_retmax,
        }
    }

    /// Two-step fetch with per-record fault isolation: a malformed detail
    /// document is skipped with a diagnostic while the rest of the batch
    /// proceeds. Records failing the classification filter are dropped
    /// silently; they are not errors.
    pub async fn fetch_variants(&self, gene: &str) -> Result<VariantBatch> {
        let term = format!("{gene}[gene]");
        let ids = self.entrez.esearch(&self.db, &term, self.retmax).await?;

        if ids.is_empty() {
            info!("no variant records for {}", gene);
            return Ok(VariantBatch::default());
        }

        debug!("fetching {} variant summaries for {}", ids.len(), gene);
        let summary = self.entrez.esummary(&self.db, &ids).await?;
        let result = summary.get("result");

        let mut batch = VariantBatch::default();
        for id in &ids {
            let doc = result.and_then(|r| r.get(id.as_str()));
            match extract_record(id, doc) {
                Ok(record) => {
                    if record.is_reportable() {
                        batch.records.push(record);
                    }
                }
                Err(e) => {
                    warn!("skipping variant {}: {}", id, e);
                    batch.skipped.push(e.to_string());
                }
            }
        }

        info!(
            "retrieved {} reportable variant(s) for {} ({} skipped)",
            batch.records.len(),
            gene,
            batch.skipped.len()
        );
        Ok(batch)
    }
}

/// Builds a fully-populated record from one summary document. Missing
/// fields default independently; only a missing or malformed document
/// fails, and that failure stays scoped to its ID.
fn extract_record(id: &str, doc: Option<&Value>) -> Result<VariantRecord> {
    let extraction_error = |message: String| PipelineError::Extraction {
        id: id.to_string(),
        message,
    };

    let doc = match doc {
        Some(value) if value.is_object() => value,
        Some(_) => return Err(extraction_error("summary document is not an object".to_string())),
        None => return Err(extraction_error("no summary document returned".to_string())),
    };

    if let Some(error) = doc.get("error").and_then(Value::as_str) {
        return Err(extraction_error(format!("registry error: {error}")));
    }

    Ok(VariantRecord {
        hgvs_name: extract_field(doc, HGVS_NAME),
        variant_type: extract_field(doc, VARIANT_TYPE),
        classification: extract_field(doc, CLASSIFICATION),
        condition: extract_field(doc, CONDITION),
    })
}

/// Walks one path through the document. Any dead end (absent key, empty
/// list, non-string leaf, blank text) yields the sentinel.
fn extract_field(doc: &Value, path: &[PathStep]) -> String {
    let mut current = doc;
    for step in path {
        current = match step {
            Key(key) => match current.get(key) {
                Some(value) => value,
                None => return UNKNOWN.to_string(),
            },
            First => match current.get(0) {
                Some(value) => value,
                None => return UNKNOWN.to_string(),
            },
        };
    }

    match current.as_str() {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn clinvar_doc(classification: &str) -> Value {
        json!({
            "uid": "12345",
            "title": "NM_007294.4(BRCA1):c.68_69del (p.Glu23fs)",
            "variation_set": [{"variant_type": "Deletion"}],
            "germline_classification": {
                "description": classification,
                "trait_set": [{"trait_name": "Hereditary breast ovarian cancer syndrome"}]
            }
        })
    }

    #[test]
    fn test_full_document_extraction() {
        let doc = clinvar_doc("Pathogenic");
        let record = extract_record("1", Some(&doc)).unwrap();
        assert_eq!(record.hgvs_name, "NM_007294.4(BRCA1):c.68_69del (p.Glu23fs)");
        assert_eq!(record.variant_type, "Deletion");
        assert_eq!(record.classification, "Pathogenic");
        assert_eq!(
            record.condition,
            "Hereditary breast ovarian cancer syndrome"
        );
    }

    #[test]
    fn test_each_field_defaults_independently() {
        let doc = json!({"uid": "1"});
        let record = extract_record("1", Some(&doc)).unwrap();
        assert_eq!(record.hgvs_name, "Unknown");
        assert_eq!(record.variant_type, "Unknown");
        assert_eq!(record.classification, "Unknown");
        assert_eq!(record.condition, "Unknown");
    }

    #[test]
    fn test_empty_lists_default() {
        let doc = json!({
            "title": "NM_000546.6(TP53):c.743G>A",
            "variation_set": [],
            "germline_classification": {"description": "Pathogenic", "trait_set": []}
        });
        let record = extract_record("1", Some(&doc)).unwrap();
        assert_eq!(record.variant_type, "Unknown");
        assert_eq!(record.condition, "Unknown");
    }

    #[test]
    fn test_classification_is_trimmed() {
        let doc = json!({
            "germline_classification": {"description": "  Likely pathogenic \n"}
        });
        let record = extract_record("1", Some(&doc)).unwrap();
        assert_eq!(record.classification, "Likely pathogenic");
        assert!(record.is_reportable());
    }

    #[test]
    fn test_blank_string_becomes_unknown() {
        let doc = json!({"title": "   "});
        let record = extract_record("1", Some(&doc)).unwrap();
        assert_eq!(record.hgvs_name, "Unknown");
    }

    #[test]
    fn test_missing_document_is_an_extraction_error() {
        assert!(extract_record("1", None).is_err());
        assert!(extract_record("1", Some(&json!("not an object"))).is_err());
    }

    #[test]
    fn test_registry_error_document_is_skipped() {
        let doc = json!({"uid": "9", "error": "cannot get document summary"});
        let err = extract_record("9", Some(&doc)).unwrap_err();
        assert!(err.to_string().contains("cannot get document summary"));
        assert!(err.to_string().contains("id 9"));
    }

    #[test]
    fn test_filter_keeps_only_reportable_records() {
        let pathogenic = extract_record("1", Some(&clinvar_doc("Pathogenic"))).unwrap();
        let benign = extract_record("1", Some(&clinvar_doc("Benign"))).unwrap();
        let uncertain = extract_record("1", Some(&clinvar_doc("Uncertain significance"))).unwrap();

        assert!(pathogenic.is_reportable());
        assert!(!benign.is_reportable());
        assert!(!uncertain.is_reportable());
    }
}
