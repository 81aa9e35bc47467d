// file: src/models/article.rs
// description: normalized literature abstract model
// reference: internal data structures

use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "No Title";
pub const NO_ABSTRACT: &str = "No abstract available";

/// One literature-index entry resolved to a (title, abstract) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbstractRecord {
    pub title: String,
    pub body: String,
}

impl AbstractRecord {
    pub fn new(title: Option<String>, body: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| NO_TITLE.to_string()),
            body: body.unwrap_or_else(|| NO_ABSTRACT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_sentinels() {
        let record = AbstractRecord::new(None, None);
        assert_eq!(record.title, "No Title");
        assert_eq!(record.body, "No abstract available");
    }

    #[test]
    fn test_present_fields_pass_through() {
        let record = AbstractRecord::new(
            Some("BRCA1 missense variants".to_string()),
            Some("We report...".to_string()),
        );
        assert_eq!(record.title, "BRCA1 missense variants");
        assert_eq!(record.body, "We report...");
    }
}
