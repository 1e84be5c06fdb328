// src/orchestrator.rs
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::config::Config;
use crate::models::{Result, SiteResult};
use crate::report::{write_report, ReportRef};
use crate::site_scraper::SiteScraper;

#[derive(Debug, Serialize)]
pub struct BulkOutcome {
    pub results: Vec<SiteResult>,
    pub report: ReportRef,
}

/// Dispatches one site extraction per input URL under a bounded concurrency
/// limit, retries the failed subset once, and materializes the CSV report.
/// The report has exactly one row per input URL, in input order, whatever
/// the completion order of the concurrent tasks.
pub struct BulkOrchestrator {
    scraper: Arc<SiteScraper>,
    max_concurrency: usize,
    retry_failed: bool,
    output_dir: PathBuf,
}

impl BulkOrchestrator {
    pub fn new(scraper: Arc<SiteScraper>, config: &Config) -> Self {
        Self {
            scraper,
            max_concurrency: config.bulk.max_concurrency,
            retry_failed: config.bulk.retry_failed,
            output_dir: PathBuf::from(&config.output.directory),
        }
    }

    pub async fn run(&self, urls: Vec<String>) -> Result<BulkOutcome> {
        info!("🚀 Starting bulk extraction of {} URLs", urls.len());

        let mut results = self.dispatch(&urls).await;

        if self.retry_failed {
            let failed: Vec<(usize, String)> = results
                .iter()
                .enumerate()
                .filter(|(_, result)| result.is_failure())
                .map(|(index, result)| (index, result.url.clone()))
                .collect();

            if !failed.is_empty() {
                info!("Retrying {} failed URLs", failed.len());
                let retry_urls: Vec<String> =
                    failed.iter().map(|(_, url)| url.clone()).collect();
                let retried = self.dispatch(&retry_urls).await;
                // A retried result fully replaces the failed one; a second
                // failure is final.
                for ((index, _), replacement) in failed.into_iter().zip(retried) {
                    results[index] = replacement;
                }
            }
        }

        let report = write_report(&results, &self.output_dir).await?;

        let successful = results.iter().filter(|r| !r.is_failure()).count();
        info!(
            "🏁 Bulk extraction complete: {}/{} successful, report {}",
            successful,
            results.len(),
            report.filename
        );

        Ok(BulkOutcome { results, report })
    }

    /// One bounded pass over `urls`. Used for both the first pass and the
    /// retry pass so the concurrency bound and ordering are uniform.
    async fn dispatch(&self, urls: &[String]) -> Vec<SiteResult> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));

        let mut handles = Vec::with_capacity(urls.len());
        for url in urls {
            let url = url.clone();
            let scraper = self.scraper.clone();
            let semaphore = semaphore.clone();
            handles.push(tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore never closed");
                scraper.scrape(&url).await
            }));
        }

        // Joining in spawn order keeps the results aligned with the input.
        let mut results = Vec::with_capacity(handles.len());
        for (url, handle) in urls.iter().zip(handles) {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    error!("Extraction task for {} aborted: {}", url, e);
                    results.push(SiteResult::failure(url, format!("internal error: {}", e)));
                }
            }
        }
        results
    }
}
