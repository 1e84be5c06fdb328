// src/fetcher/mod.rs
use async_trait::async_trait;
use thiserror::Error;
use url::Url;

pub mod http;

pub use http::HttpFetcher;

#[derive(Debug, Error)]
pub enum FetchError {
    /// No usable page content within the timeout/fallback budget: timeout,
    /// connection failure, non-2xx status, or exhausted scheme fallbacks.
    #[error("unreachable {url}: {reason}")]
    Unreachable { url: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    /// Post-redirect URL, used to decide whether a located contact page
    /// resolved to a distinct page.
    pub final_url: Url,
}

/// The fetch capability: resolve a URL to page content or `Unreachable`.
/// Implementations must follow redirects and never treat a failed fetch as
/// a fatal error.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Ordered fallback over fetch strategies: each implementation is tried in
/// turn until one yields content. A browser-rendered fetcher for
/// JavaScript-heavy pages slots in here as just another implementation.
pub struct FetcherChain {
    fetchers: Vec<Box<dyn Fetcher>>,
}

impl FetcherChain {
    pub fn new(fetchers: Vec<Box<dyn Fetcher>>) -> Self {
        Self { fetchers }
    }
}

#[async_trait]
impl Fetcher for FetcherChain {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let mut last_error = FetchError::Unreachable {
            url: url.to_string(),
            reason: "no fetch strategy configured".to_string(),
        };
        for fetcher in &self.fetchers {
            match fetcher.fetch(url).await {
                Ok(page) => return Ok(page),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

/// Input lists routinely omit or misstate the scheme; give bare hosts an
/// https scheme so the first fetch has something to work with (the scheme
/// fallback covers http-only sites).
pub fn normalize_input_url(raw: &str) -> Result<Url, url::ParseError> {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Url::parse(&format!("https://{}", trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedFetcher {
        result: Result<FetchedPage, ()>,
    }

    #[async_trait]
    impl Fetcher for CannedFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
            match &self.result {
                Ok(page) => Ok(page.clone()),
                Err(()) => Err(FetchError::Unreachable {
                    url: url.to_string(),
                    reason: "canned failure".to_string(),
                }),
            }
        }
    }

    fn canned(body: &str) -> CannedFetcher {
        CannedFetcher {
            result: Ok(FetchedPage {
                body: body.to_string(),
                final_url: Url::parse("https://example.com/").unwrap(),
            }),
        }
    }

    fn broken() -> CannedFetcher {
        CannedFetcher { result: Err(()) }
    }

    #[tokio::test]
    async fn chain_falls_through_to_the_next_strategy() {
        let chain = FetcherChain::new(vec![Box::new(broken()), Box::new(canned("rendered"))]);
        let url = Url::parse("https://example.com/").unwrap();

        let page = chain.fetch(&url).await.unwrap();
        assert_eq!(page.body, "rendered");
    }

    #[tokio::test]
    async fn chain_stops_at_the_first_success() {
        let chain = FetcherChain::new(vec![Box::new(canned("plain")), Box::new(canned("rendered"))]);
        let url = Url::parse("https://example.com/").unwrap();

        let page = chain.fetch(&url).await.unwrap();
        assert_eq!(page.body, "plain");
    }

    #[tokio::test]
    async fn exhausted_chain_reports_the_last_error() {
        let chain = FetcherChain::new(vec![Box::new(broken()), Box::new(broken())]);
        let url = Url::parse("https://example.com/").unwrap();

        let FetchError::Unreachable { reason, .. } = chain.fetch(&url).await.unwrap_err();
        assert_eq!(reason, "canned failure");
    }

    #[test]
    fn bare_hosts_get_https() {
        let url = normalize_input_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn explicit_schemes_are_kept() {
        let url = normalize_input_url("http://example.com/shop").unwrap();
        assert_eq!(url.as_str(), "http://example.com/shop");
    }

    #[test]
    fn host_with_port_is_not_mistaken_for_a_scheme() {
        // "example.com:8080" parses as scheme "example.com" on its own.
        let url = normalize_input_url("example.com:8080").unwrap();
        assert_eq!(url.as_str(), "https://example.com:8080/");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let url = normalize_input_url("  example.com \n").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn garbage_input_is_an_error() {
        assert!(normalize_input_url("not a url").is_err());
        assert!(normalize_input_url("").is_err());
    }
}
