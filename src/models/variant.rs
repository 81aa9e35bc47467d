// file: src/models/variant.rs
// description: clinical variant model with classification filtering
// reference: internal data structures

use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";

/// Classifications considered clinically actionable. Matching is
/// case-insensitive and exact (substrings like "pathogenic/likely
/// pathogenic" composites do not match).
const REPORTABLE_CLASSIFICATIONS: [&str; 2] = ["pathogenic", "likely pathogenic"];

/// One variant-registry entry resolved to a fully-populated record.
/// Fields missing in the source document carry the "Unknown" sentinel,
/// never an empty string or absent key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantRecord {
    pub hgvs_name: String,
    pub variant_type: String,
    pub classification: String,
    pub condition: String,
}

impl VariantRecord {
    /// True when the classification admits this record into the filtered
    /// output set.
    pub fn is_reportable(&self) -> bool {
        let classification = self.classification.to_lowercase();
        REPORTABLE_CLASSIFICATIONS
            .iter()
            .any(|accepted| *accepted == classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(classification: &str) -> VariantRecord {
        VariantRecord {
            hgvs_name: "NM_007294.4(BRCA1):c.68_69del".to_string(),
            variant_type: "Deletion".to_string(),
            classification: classification.to_string(),
            condition: "Hereditary breast ovarian cancer syndrome".to_string(),
        }
    }

    #[test]
    fn test_pathogenic_is_reportable_any_case() {
        assert!(record("Pathogenic").is_reportable());
        assert!(record("pathogenic").is_reportable());
        assert!(record("PATHOGENIC").is_reportable());
        assert!(record("Likely pathogenic").is_reportable());
        assert!(record("likely Pathogenic").is_reportable());
    }

    #[test]
    fn test_other_classifications_are_excluded() {
        assert!(!record("Benign").is_reportable());
        assert!(!record("Likely benign").is_reportable());
        assert!(!record("Uncertain significance").is_reportable());
        assert!(!record("Unknown").is_reportable());
        assert!(!record("").is_reportable());
    }

    #[test]
    fn test_composite_labels_are_excluded() {
        // exact membership, not substring matching
        assert!(!record("Pathogenic/Likely pathogenic").is_reportable());
        assert!(!record("not pathogenic").is_reportable());
    }
}
