//! External collaborators of the ingest pipeline
//!
//! Both the page source and the LLM sit behind traits so the pipeline can run
//! against stubs in tests.

use async_trait::async_trait;

use crate::IngestResult;

pub mod gemini_client;
pub mod geo_lookup;
pub mod name_extractor;
pub mod page_fetcher;

pub use gemini_client::GeminiClient;
pub use geo_lookup::geography_for_zip;
pub use name_extractor::{extract_names, PageKind};
pub use page_fetcher::{html_to_text, HttpPageFetcher};

/// Fetches a lookup page and returns its plain text
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and strip markup
    ///
    /// # Returns
    /// * `Ok(String)` - page text, words separated by single spaces
    /// * `Err(_)` - network or HTTP failure (logged by the caller, not fatal)
    async fn fetch_text(&self, url: &str) -> IngestResult<String>;
}

/// Text-generation service used to pull names out of page text
#[async_trait]
pub trait ExtractionService: Send + Sync {
    /// Service identifier for logs (e.g., "Gemini")
    fn service_id(&self) -> &'static str;

    /// Submit a prompt and return the raw response text
    async fn generate(&self, prompt: &str) -> IngestResult<String>;
}
