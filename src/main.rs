// src/main.rs
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use contact_scraper::config::{load_config, Config};
use contact_scraper::extractor::ContactExtractor;
use contact_scraper::fetcher::{FetcherChain, HttpFetcher};
use contact_scraper::models::Result;
use contact_scraper::orchestrator::BulkOrchestrator;
use contact_scraper::server::{build_rocket, ServerState};
use contact_scraper::site_scraper::SiteScraper;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    let level_directive = format!("contact_scraper={}", config.logging.level).parse()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(level_directive)
                .add_directive("rocket=warn".parse().unwrap()),
        )
        .init();

    // Create output directory for report artifacts
    tokio::fs::create_dir_all(&config.output.directory).await?;

    // Wire the extraction pipeline. The chain currently holds the plain
    // HTTP fetcher only; a browser-rendered fetcher would be pushed after
    // it for JavaScript-heavy sites.
    let fetcher = Arc::new(FetcherChain::new(vec![Box::new(HttpFetcher::new(
        &config.fetch,
    ))]));
    let extractor = ContactExtractor::new(&config.extraction)?;
    let scraper = Arc::new(SiteScraper::new(fetcher, extractor));
    let orchestrator = BulkOrchestrator::new(scraper.clone(), &config);

    info!(
        "Starting contact scraper API on {}:{}",
        config.server.address, config.server.port
    );

    let state = ServerState {
        config,
        scraper,
        orchestrator,
    };
    build_rocket(state).launch().await?;

    Ok(())
}
