// file: src/retrieval/literature.rs
// description: PubMed abstract retrieval and article parsing
// reference: https://docs.rs/quick-xml

use crate::config::EntrezConfig;
use crate::error::Result;
use crate::models::AbstractRecord;
use crate::retrieval::entrez::EntrezClient;
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, info};

/// Mutation-type keywords OR-ed into every literature query to bias
/// results toward mutation-relevant articles.
const MUTATION_KEYWORDS: [&str; 5] = [
    "missense",
    "nonsense",
    "frameshift",
    "deletion",
    "insertion",
];

pub struct LiteratureRetriever {
    entrez: EntrezClient,
    db: String,
    retmax: usize,
}

impl LiteratureRetriever {
    pub fn new(entrez: EntrezClient, config: &EntrezConfig) -> Self {
        Self {
            entrez,
            db: config.literature_db.clone(),
            retmax: config.literature_retmax,
        }
    }

    /// Two-step fetch: ID search, then one batch detail fetch. An empty ID
    /// list short-circuits without a second request. Any transport or parse
    /// failure aborts the whole call; no partial list escapes.
    pub async fn fetch_abstracts(&self, gene: &str) -> Result<Vec<AbstractRecord>> {
        let term = build_term(gene);
        let ids = self.entrez.esearch(&self.db, &term, self.retmax).await?;

        if ids.is_empty() {
            info!("no literature results for {}", gene);
            return Ok(Vec::new());
        }

        debug!("fetching {} article(s) for {}", ids.len(), gene);
        let xml = self.entrez.efetch_xml(&self.db, &ids).await?;
        let records = parse_articles(&xml)?;

        info!("retrieved {} abstract(s) for {}", records.len(), gene);
        Ok(records)
    }
}

/// Gene symbol AND-ed with the fixed mutation-keyword disjunction.
fn build_term(gene: &str) -> String {
    format!("{gene} AND ({})", MUTATION_KEYWORDS.join(" OR "))
}

/// Parses a PubmedArticleSet document. Titles default to "No Title";
/// abstract bodies are the space-joined AbstractText fragments in document
/// order, defaulting to "No abstract available". A malformed article aborts
/// the whole parse rather than being skipped.
fn parse_articles(xml: &str) -> Result<Vec<AbstractRecord>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut title: Option<String> = None;
    let mut fragments: Vec<String> = Vec::new();
    let mut text_buf = String::new();
    let mut in_article = false;
    let mut in_title = false;
    let mut in_fragment = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"PubmedArticle" => {
                    in_article = true;
                    title = None;
                    fragments.clear();
                }
                b"ArticleTitle" if in_article => {
                    in_title = true;
                    text_buf.clear();
                }
                b"AbstractText" if in_article => {
                    in_fragment = true;
                    text_buf.clear();
                }
                _ => {}
            },
            Event::Text(t) => {
                if in_title || in_fragment {
                    text_buf.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"ArticleTitle" if in_title => {
                    in_title = false;
                    title = Some(text_buf.trim().to_string());
                }
                b"AbstractText" if in_fragment => {
                    in_fragment = false;
                    fragments.push(text_buf.trim().to_string());
                }
                b"PubmedArticle" if in_article => {
                    in_article = false;
                    let body = if fragments.is_empty() {
                        None
                    } else {
                        Some(fragments.join(" "))
                    };
                    records.push(AbstractRecord::new(title.take(), body));
                    fragments.clear();
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(records)
}
