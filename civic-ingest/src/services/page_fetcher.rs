//! Lookup page fetcher
//!
//! Plain reqwest GET with a browser User-Agent; the lookup site rejects
//! obvious bots. Markup is stripped with the `scraper` HTML parser.

use async_trait::async_trait;
use scraper::Html;
use std::time::Duration;

use super::PageFetcher;
use crate::{IngestError, IngestResult};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Elements whose text never reaches the LLM
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// HTTP page fetcher
pub struct HttpPageFetcher {
    http_client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> IngestResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| IngestError::Network(e.to_string()))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> IngestResult<String> {
        tracing::info!(url = %url, "Fetching lookup page");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| IngestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| IngestError::Network(e.to_string()))?;

        tracing::debug!(url = %url, bytes = html.len(), "Fetched lookup page");

        Ok(html_to_text(&html))
    }
}

/// Strip markup and return the visible text
///
/// Text nodes are trimmed, empty ones dropped and the rest joined with a
/// single space.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let pieces: Vec<&str> = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            });
            if hidden {
                return None;
            }
            let trimmed = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect();

    pieces.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(HttpPageFetcher::new().is_ok());
    }

    #[test]
    fn test_html_to_text_joins_trimmed_nodes() {
        let html = r#"
            <html>
              <head><title>Find Your Representative</title></head>
              <body>
                <h1>  Results  </h1>
                <p>Your representative is <a href="/meng">Grace   Meng</a>.</p>
              </body>
            </html>
        "#;

        assert_eq!(
            html_to_text(html),
            "Find Your Representative Results Your representative is Grace   Meng ."
        );
    }

    #[test]
    fn test_html_to_text_skips_scripts_and_styles() {
        let html = r#"
            <html><head><style>body { color: red; }</style></head>
            <body><script>var x = 1;</script><p>Visible</p><!-- hidden --></body></html>
        "#;

        assert_eq!(html_to_text(html), "Visible");
    }

    #[test]
    fn test_html_to_text_empty_document() {
        assert_eq!(html_to_text(""), "");
    }
}
