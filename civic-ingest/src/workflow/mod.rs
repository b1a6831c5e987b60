//! Scrape run orchestration

pub mod pipeline;

pub use pipeline::{IngestPipeline, IngestReport, PipelineSettings, ZipOutcome, ZipStatus};
