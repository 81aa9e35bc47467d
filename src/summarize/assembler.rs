// file: src/summarize/assembler.rs
// description: evidence-to-prompt assembly and shared table rendering
// reference: internal prompt construction

use crate::models::{AbstractRecord, EvidenceBundle, VariantRecord};

pub const NO_ABSTRACTS_MARKER: &str = "no abstracts found";

const TABLE_HEADER: &str = "| HGVS | Type | Significance | Condition |\n\
                            | --- | --- | --- | --- |\n";

/// Renders the fixed-column variant table. The header always renders, so
/// an empty sequence yields a zero-row table. This is the single renderer
/// used for prompt assembly and console display alike.
pub fn variant_table(variants: &[VariantRecord]) -> String {
    let mut table = String::from(TABLE_HEADER);
    for variant in variants {
        table.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            variant.hgvs_name, variant.variant_type, variant.classification, variant.condition
        ));
    }
    table
}

/// Title/body abstract blocks separated by blank lines, or the fixed
/// marker when no abstracts were retrieved.
fn abstract_blocks(abstracts: &[AbstractRecord]) -> String {
    if abstracts.is_empty() {
        return NO_ABSTRACTS_MARKER.to_string();
    }

    abstracts
        .iter()
        .map(|record| format!("Title: {}\n{}", record.title, record.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Merges both renderings into the summarization prompt. Pure and
/// deterministic: identical bundles produce byte-identical documents.
pub fn assemble(bundle: &EvidenceBundle) -> String {
    format!(
        "You are an expert biomedical summarizer. Below is the collected evidence \
         for mutations in the gene {gene}.\n\n\
         Clinically significant variants ({gene}):\n\
         {table}\n\
         Literature abstracts:\n\
         {abstracts}\n\n\
         Synthesize the mutation patterns observed for {gene} and their clinical \
         significance into a concise narrative summary.",
        gene = bundle.gene,
        table = variant_table(&bundle.variants),
        abstracts = abstract_blocks(&bundle.abstracts),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_variant() -> VariantRecord {
        VariantRecord {
            hgvs_name: "NM_007294.4(BRCA1):c.68_69del".to_string(),
            variant_type: "Deletion".to_string(),
            classification: "Pathogenic".to_string(),
            condition: "Hereditary breast ovarian cancer syndrome".to_string(),
        }
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = variant_table(&[]);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("| HGVS | Type | Significance | Condition |"));
    }

    #[test]
    fn test_one_variant_one_data_row() {
        let table = variant_table(&[sample_variant()]);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("| NM_007294.4(BRCA1):c.68_69del | Deletion | Pathogenic |"));
    }

    #[test]
    fn test_empty_abstracts_use_marker() {
        let bundle = EvidenceBundle::new("BRCA1", vec![], vec![sample_variant()]);
        let document = assemble(&bundle);
        assert!(document.contains("no abstracts found"));
    }

    #[test]
    fn test_abstracts_render_as_title_body_blocks() {
        let abstracts = vec![
            AbstractRecord::new(Some("First study".to_string()), Some("Body one.".to_string())),
            AbstractRecord::new(Some("Second study".to_string()), Some("Body two.".to_string())),
        ];
        let bundle = EvidenceBundle::new("TP53", abstracts, vec![]);
        let document = assemble(&bundle);
        assert!(document.contains("Title: First study\nBody one."));
        assert!(document.contains("Title: Second study\nBody two."));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let bundle = EvidenceBundle::new(
            "BRCA1",
            vec![AbstractRecord::new(None, None)],
            vec![sample_variant()],
        );
        assert_eq!(assemble(&bundle), assemble(&bundle));
    }

    #[test]
    fn test_document_names_the_gene() {
        let bundle = EvidenceBundle::new("MLH1", vec![], vec![]);
        let document = assemble(&bundle);
        assert!(document.contains("gene MLH1"));
    }
}
