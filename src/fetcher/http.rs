// src/fetcher/http.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::FetchConfig;
use crate::fetcher::{FetchError, FetchedPage, Fetcher};

/// Plain HTTP fetch via reqwest: bounded per-request timeout, redirects
/// followed, and a single retry on the alternate scheme (http ⇄ https)
/// before the URL is declared unreachable.
pub struct HttpFetcher {
    client: Client,
    scheme_fallback: bool,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            scheme_fallback: config.scheme_fallback,
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<FetchedPage, String> {
        debug!("Fetching: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(|e| e.to_string())?;
        debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage { body, final_url })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let first_reason = match self.fetch_once(url).await {
            Ok(page) => return Ok(page),
            Err(reason) => reason,
        };

        if self.scheme_fallback {
            if let Some(alternate) = alternate_scheme(url) {
                debug!("Retrying {} as {}", url, alternate);
                match self.fetch_once(&alternate).await {
                    Ok(page) => return Ok(page),
                    Err(alternate_reason) => {
                        return Err(FetchError::Unreachable {
                            url: url.to_string(),
                            reason: format!(
                                "{}; {} fallback: {}",
                                first_reason,
                                alternate.scheme(),
                                alternate_reason
                            ),
                        });
                    }
                }
            }
        }

        Err(FetchError::Unreachable {
            url: url.to_string(),
            reason: first_reason,
        })
    }
}

fn alternate_scheme(url: &Url) -> Option<Url> {
    let flipped = match url.scheme() {
        "http" => "https",
        "https" => "http",
        _ => return None,
    };
    let mut alternate = url.clone();
    if alternate.set_scheme(flipped).is_err() {
        return None;
    }
    Some(alternate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_flips_to_http() {
        let url = Url::parse("https://example.com/contact").unwrap();
        let alternate = alternate_scheme(&url).unwrap();
        assert_eq!(alternate.as_str(), "http://example.com/contact");
    }

    #[test]
    fn http_flips_to_https() {
        let url = Url::parse("http://example.com/").unwrap();
        let alternate = alternate_scheme(&url).unwrap();
        assert_eq!(alternate.as_str(), "https://example.com/");
    }

    #[test]
    fn other_schemes_have_no_alternate() {
        let url = Url::parse("ftp://example.com/").unwrap();
        assert!(alternate_scheme(&url).is_none());
    }
}
