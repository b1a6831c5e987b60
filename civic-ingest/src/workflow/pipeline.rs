//! Full scrape run
//!
//! Clears the database, then processes ZIP codes one at a time:
//! fetch page → extract names → store rows. A failure for one ZIP code is
//! logged and the run moves on; rows already stored for earlier ZIP codes
//! stay in place.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use civic_common::config::IngestConfig;
use civic_common::db::{insert_zip_representatives, reset_all, Branch, NewRepresentative};
use civic_common::title::HOUSE_REP;

use crate::services::geo_lookup::is_known_zip;
use crate::services::{extract_names, geography_for_zip, ExtractionService, PageFetcher};
use crate::IngestResult;

/// Party stored for scraped representatives (the lookup page does not say)
const UNKNOWN_PARTY: &str = "Unknown";

/// Run settings
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// ZIP codes in processing order
    pub zip_codes: Vec<String>,
    /// Pause between two page fetches
    pub request_delay: Duration,
    /// Lookup URL with a `{zip}` placeholder
    pub source_url_template: String,
}

impl PipelineSettings {
    pub fn source_url(&self, zip_code: &str) -> String {
        self.source_url_template.replace("{zip}", zip_code)
    }
}

impl From<&IngestConfig> for PipelineSettings {
    fn from(config: &IngestConfig) -> Self {
        Self {
            zip_codes: config.zip_codes.clone(),
            request_delay: Duration::from_millis(config.request_delay_ms),
            source_url_template: config.source_url_template.clone(),
        }
    }
}

/// What happened to one ZIP code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZipStatus {
    /// Rows written for these representatives
    Stored { representatives: Vec<String> },
    /// Page could not be fetched
    NoContent,
    /// Page fetched but no names came back
    NoNames,
    /// Insertion failed; nothing stored for this ZIP code
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipOutcome {
    pub zip_code: String,
    pub status: ZipStatus,
}

impl ZipOutcome {
    fn new(zip_code: &str, status: ZipStatus) -> Self {
        Self {
            zip_code: zip_code.to_string(),
            status,
        }
    }

    pub fn representatives_stored(&self) -> usize {
        match &self.status {
            ZipStatus::Stored { representatives } => representatives.len(),
            _ => 0,
        }
    }
}

/// Summary of a scrape run
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<ZipOutcome>,
}

impl IngestReport {
    /// Number of ZIP codes with stored rows
    pub fn zips_stored(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ZipStatus::Stored { .. }))
            .count()
    }

    /// Total representative rows written
    pub fn representatives_stored(&self) -> usize {
        self.outcomes.iter().map(ZipOutcome::representatives_stored).sum()
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Scrape pipeline over a page source and an extraction service
pub struct IngestPipeline {
    db: SqlitePool,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ExtractionService>,
    settings: PipelineSettings,
}

impl IngestPipeline {
    pub fn new(
        db: SqlitePool,
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn ExtractionService>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            db,
            fetcher,
            extractor,
            settings,
        }
    }

    /// Replace all stored data with a fresh scrape of every configured ZIP code
    ///
    /// Only a failure to clear the old data aborts the run.
    pub async fn run(&self) -> IngestResult<IngestReport> {
        let started_at = Utc::now();

        info!("Clearing old data from the database");
        reset_all(&self.db).await?;

        let mut outcomes = Vec::with_capacity(self.settings.zip_codes.len());
        for (index, zip_code) in self.settings.zip_codes.iter().enumerate() {
            if index > 0 && !self.settings.request_delay.is_zero() {
                tokio::time::sleep(self.settings.request_delay).await;
            }
            outcomes.push(self.process_zip(zip_code).await);
        }

        let report = IngestReport {
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };

        info!(
            zips = report.outcomes.len(),
            zips_stored = report.zips_stored(),
            representatives = report.representatives_stored(),
            elapsed_ms = report.duration().num_milliseconds(),
            "Scrape run finished"
        );

        Ok(report)
    }

    /// Fetch, extract and store one ZIP code
    pub async fn process_zip(&self, zip_code: &str) -> ZipOutcome {
        info!(zip = %zip_code, "Processing ZIP code");

        let url = self.settings.source_url(zip_code);
        let content = match self.fetcher.fetch_text(&url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(zip = %zip_code, url = %url, error = %e, "Error fetching lookup page");
                return ZipOutcome::new(zip_code, ZipStatus::NoContent);
            }
        };

        let names = extract_names(self.extractor.as_ref(), &content).await;
        if names.is_empty() {
            info!(zip = %zip_code, "No representative names found, skipping database update");
            return ZipOutcome::new(zip_code, ZipStatus::NoNames);
        }

        if !is_known_zip(zip_code) {
            warn!(zip = %zip_code, "No geographic metadata for ZIP code, storing placeholders");
        }
        let geography = geography_for_zip(zip_code);
        let reps: Vec<NewRepresentative> = names
            .iter()
            .map(|name| NewRepresentative::new(name.as_str(), UNKNOWN_PARTY, Branch::Federal, HOUSE_REP))
            .collect();

        match insert_zip_representatives(&self.db, &geography, &reps).await {
            Ok(_) => {
                for name in &names {
                    info!(zip = %zip_code, name = %name, "Inserted representative");
                }
                ZipOutcome::new(zip_code, ZipStatus::Stored { representatives: names })
            }
            Err(e) => {
                error!(zip = %zip_code, error = %e, "Database error");
                ZipOutcome::new(zip_code, ZipStatus::DatabaseError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_substitutes_zip() {
        let settings = PipelineSettings::from(&IngestConfig::default());
        assert_eq!(
            settings.source_url("11354"),
            "https://ziplook.house.gov/htbin/findrep_house?ZIP=11354"
        );
        assert_eq!(settings.request_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_report_counts() {
        let now = Utc::now();
        let report = IngestReport {
            started_at: now,
            finished_at: now,
            outcomes: vec![
                ZipOutcome::new(
                    "90210",
                    ZipStatus::Stored {
                        representatives: vec!["Ted Lieu".to_string(), "Adam Schiff".to_string()],
                    },
                ),
                ZipOutcome::new("13662", ZipStatus::NoNames),
                ZipOutcome::new("11354", ZipStatus::NoContent),
            ],
        };

        assert_eq!(report.zips_stored(), 1);
        assert_eq!(report.representatives_stored(), 2);
        assert_eq!(report.duration(), chrono::Duration::zero());
    }
}
