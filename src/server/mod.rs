// src/server/mod.rs
use std::sync::Arc;

use rocket::{routes, Build, Rocket};

use crate::api::*;
use crate::config::Config;
use crate::orchestrator::BulkOrchestrator;
use crate::site_scraper::SiteScraper;

pub mod routes;

pub struct ServerState {
    pub config: Config,
    pub scraper: Arc<SiteScraper>,
    pub orchestrator: BulkOrchestrator,
}

pub fn build_rocket(state: ServerState) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", state.config.server.address.clone()))
        .merge(("port", state.config.server.port));

    rocket::custom(figment).manage(state).mount(
        "/api",
        routes![
            // Health and info endpoints
            routes::health::health_check,
            routes::health::index,
            // Extraction endpoints
            extract_single,
            extract_bulk,
            extract_upload,
            // Report retrieval
            download_report,
        ],
    )
}
