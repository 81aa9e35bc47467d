// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub entrez: EntrezConfig,
    pub llm: LlmConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntrezConfig {
    pub base_url: String,
    pub literature_db: String,
    pub variant_db: String,
    pub literature_retmax: usize,
    pub variant_retmax: usize,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GENE_SUMMARIZE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        if config.llm.api_key.is_none() {
            config.llm.api_key = std::env::var("GROQ_API_KEY").ok();
        }
        if config.entrez.api_key.is_none() {
            config.entrez.api_key = std::env::var("NCBI_API_KEY").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            entrez: EntrezConfig {
                base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils".to_string(),
                literature_db: "pubmed".to_string(),
                variant_db: "clinvar".to_string(),
                literature_retmax: 10,
                variant_retmax: 200,
                api_key: None,
            },
            llm: LlmConfig {
                api_key: None,
                model: "openai/gpt-oss-120b".to_string(),
                base_url: "https://api.groq.com/openai/v1".to_string(),
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./reports"),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.llm.api_key.as_deref().unwrap_or("").trim().is_empty() {
            return Err(PipelineError::Config(
                "llm.api_key is required (set GROQ_API_KEY or llm.api_key)".to_string(),
            ));
        }

        if self.entrez.literature_retmax == 0 {
            return Err(PipelineError::Config(
                "entrez.literature_retmax must be greater than 0".to_string(),
            ));
        }

        if self.entrez.variant_retmax == 0 {
            return Err(PipelineError::Config(
                "entrez.variant_retmax must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_eutils() {
        let config = Config::default_config();
        assert!(config.entrez.base_url.contains("eutils.ncbi.nlm.nih.gov"));
        assert_eq!(config.entrez.literature_db, "pubmed");
        assert_eq!(config.entrez.variant_db, "clinvar");
    }

    #[test]
    fn test_default_caps() {
        let config = Config::default_config();
        assert_eq!(config.entrez.literature_retmax, 10);
        assert_eq!(config.entrez.variant_retmax, 200);
    }

    #[test]
    fn test_validate_requires_llm_key() {
        let config = Config::default_config();
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.llm.api_key = Some("gsk_test".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_caps() {
        let mut config = Config::default_config();
        config.llm.api_key = Some("gsk_test".to_string());
        config.entrez.variant_retmax = 0;
        assert!(config.validate().is_err());
    }
}
