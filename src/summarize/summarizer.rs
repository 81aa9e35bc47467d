// file: src/summarize/summarizer.rs
// description: Groq chat-completions client for narrative generation
// reference: https://console.groq.com/docs/api-reference

use crate::config::LlmConfig;
use crate::error::{PipelineError, Result};
use crate::models::EvidenceBundle;
use crate::summarize::assembler;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "You are a biomedical assistant that writes concise, \
    clinically accurate summaries of gene mutation evidence for a professional audience.";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Outcome of one summarization attempt. A degraded outcome still carries
/// a usable narrative; the diagnostic feeds the run's warning list.
#[derive(Debug)]
pub struct Summary {
    pub narrative: String,
    pub diagnostic: Option<String>,
}

impl Summary {
    fn clean(narrative: String) -> Self {
        Self {
            narrative,
            diagnostic: None,
        }
    }

    fn degraded(narrative: String, diagnostic: String) -> Self {
        Self {
            narrative,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Generative-text backend consumer. Holds its own configuration; nothing
/// here is process-global.
pub struct Summarizer {
    client: Client,
    config: LlmConfig,
}

impl Summarizer {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Never fails the pipeline: backend errors collapse into a diagnostic
    /// narrative. An evidence-free bundle short-circuits to a fixed message
    /// without touching the backend.
    pub async fn summarize(&self, bundle: &EvidenceBundle) -> Summary {
        if bundle.is_empty() {
            return Summary::clean(format!("No relevant data found for {}.", bundle.gene));
        }

        let document = assembler::assemble(bundle);

        match self.complete(&document).await {
            Ok(narrative) => Summary::clean(narrative),
            Err(e) => {
                warn!("summarization degraded for {}: {}", bundle.gene, e);
                Summary::degraded(
                    format!("Summary generation failed: {e}"),
                    format!("summarization degraded: {e}"),
                )
            }
        }
    }

    /// One chat completion: fixed system instruction plus the assembled
    /// document as user content.
    async fn complete(&self, document: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: document.to_string(),
                },
            ],
        };

        debug!("requesting completion for {} chars", document.len());

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key.as_deref().unwrap_or_default()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::Backend(format!(
                "completion request failed with status {status}: {error_text}"
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            PipelineError::Backend(format!("failed to parse completion response: {e}"))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                PipelineError::Backend("no completion choices returned".to_string())
            })
    }
}
