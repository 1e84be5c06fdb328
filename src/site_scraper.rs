// src/site_scraper.rs
use std::sync::Arc;

use tracing::{debug, warn};

use crate::extractor::{locate_contact_page, parse_page, ContactExtractor};
use crate::fetcher::{normalize_input_url, Fetcher};
use crate::models::SiteResult;

/// Runs one full site extraction: fetch home, locate the contact page,
/// fetch it when distinct, extract and union contacts from both pages.
/// Every outcome is a terminal `SiteResult`; a failed URL never escapes as
/// an error, so one site can't abort a batch.
pub struct SiteScraper {
    fetcher: Arc<dyn Fetcher>,
    extractor: ContactExtractor,
}

impl SiteScraper {
    pub fn new(fetcher: Arc<dyn Fetcher>, extractor: ContactExtractor) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn scrape(&self, input_url: &str) -> SiteResult {
        let url = match normalize_input_url(input_url) {
            Ok(url) => url,
            Err(e) => return SiteResult::failure(input_url, format!("Invalid URL: {}", e)),
        };

        let home = match self.fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Home fetch failed for {}: {}", input_url, e);
                return SiteResult::failure(input_url, "Site not reachable");
            }
        };

        let home_content = parse_page(&home.body);
        let mut contacts = self
            .extractor
            .extract(&home_content.text, &home_content.links);

        let contact_url = locate_contact_page(&home_content.links, &home.final_url);

        if contact_url == home.final_url {
            debug!("{}: homepage doubles as contact page", input_url);
            return SiteResult {
                url: input_url.to_string(),
                contact_page: Some(contact_url.to_string()),
                emails: contacts.emails,
                phones: contacts.phones,
                error: None,
            };
        }

        match self.fetcher.fetch(&contact_url).await {
            Ok(contact) => {
                let contact_content = parse_page(&contact.body);
                contacts.merge(
                    self.extractor
                        .extract(&contact_content.text, &contact_content.links),
                );
            }
            Err(e) => {
                // Home content is already in hand; degrade to home-only
                // results instead of failing the site.
                warn!("Contact page fetch failed for {}: {}", input_url, e);
            }
        }

        SiteResult {
            url: input_url.to_string(),
            contact_page: Some(contact_url.to_string()),
            emails: contacts.emails,
            phones: contacts.phones,
            error: None,
        }
    }
}
