//! Representative name extraction
//!
//! The lookup site renders a different page when a ZIP code spans several
//! congressional districts. The page kind picks the prompt; the service is
//! asked to answer with `{"names": [...]}` only.

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::ExtractionService;
use crate::{IngestError, IngestResult};

/// Phrase the lookup site shows on multi-district pages
pub const MULTI_DISTRICT_MARKER: &str = "overlaps with more than one congressional district";

/// Page text beyond this many characters is not sent to the LLM
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Layout of a lookup page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    SingleRepresentative,
    MultiRepresentative,
}

impl PageKind {
    pub fn detect(content: &str) -> Self {
        if content.contains(MULTI_DISTRICT_MARKER) {
            PageKind::MultiRepresentative
        } else {
            PageKind::SingleRepresentative
        }
    }
}

/// Build the extraction prompt for a page
pub fn build_prompt(kind: PageKind, content: &str) -> String {
    let (task, example) = match kind {
        PageKind::MultiRepresentative => (
            "From the following text, extract a list of all U.S. House Representatives' full names.",
            r#"{"names": ["Name One", "Name Two", "Name Three"]}"#,
        ),
        PageKind::SingleRepresentative => (
            "From the following text, find the full name of the U.S. House Representative.",
            r#"{"names": ["Full Name"]}"#,
        ),
    };

    format!(
        "{task}\nRespond ONLY with a JSON object in this exact format: {example}\n\nText:\n---\n{text}\n---\n",
        task = task,
        example = example,
        text = truncate_chars(content, MAX_PROMPT_CHARS),
    )
}

/// First `max` characters of `s`, never splitting a character
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[derive(Debug, Deserialize)]
struct NamesPayload {
    #[serde(default)]
    names: Vec<String>,
}

/// Parse the service response into a list of names
///
/// Markdown code fences are stripped; blank names are dropped. An object
/// without a `names` key is an empty list.
pub fn parse_names(response: &str) -> IngestResult<Vec<String>> {
    let cleaned = response.trim().replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    // Tolerate chatter around the JSON object
    let json = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => &cleaned[start..=end],
        _ => cleaned,
    };

    let payload: NamesPayload =
        serde_json::from_str(json).map_err(|e| IngestError::Parse(e.to_string()))?;

    Ok(payload
        .names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect())
}

/// Ask the extraction service for the representative names on a page
///
/// Never fails: service errors and malformed responses are logged and
/// yield an empty list.
pub async fn extract_names(service: &dyn ExtractionService, content: &str) -> Vec<String> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let kind = PageKind::detect(content);
    match kind {
        PageKind::MultiRepresentative => info!("Multi-representative page detected"),
        PageKind::SingleRepresentative => info!("Single-representative page detected"),
    }

    let prompt = build_prompt(kind, content);
    info!(service = service.service_id(), "Asking extraction service for names");

    let response = match service.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(service = service.service_id(), error = %e, "Extraction service call failed");
            return Vec::new();
        }
    };
    debug!(response = %response.trim(), "Extraction service response");

    match parse_names(&response) {
        Ok(names) => names,
        Err(e) => {
            warn!(error = %e, "Could not parse extraction service response");
            Vec::new()
        }
    }
}
