//! civic-ingest library
//!
//! Scrapes the House representative lookup page for each configured ZIP
//! code, asks an LLM for the representative names and stores them.

pub mod config;
pub mod error;
pub mod services;
pub mod workflow;

pub use crate::error::{IngestError, IngestResult};
pub use crate::services::{ExtractionService, PageFetcher};
pub use crate::workflow::{IngestPipeline, IngestReport, PipelineSettings, ZipOutcome, ZipStatus};
