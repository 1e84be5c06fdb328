use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub fetch: FetchConfig,
    pub extraction: ExtractionConfig,
    pub bulk: BulkConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub scheme_fallback: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Email domains that show up in page markup as tooling artifacts
    /// (error trackers, site builders) rather than genuine contacts.
    /// Matched as substrings of the domain so subdomain variants are
    /// caught too.
    pub junk_email_domains: Vec<String>,
    pub phone: PhoneConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhoneConfig {
    /// National/international shape scanned for in visible text. Capture
    /// group 1 (when present) is taken as the national number.
    pub pattern: String,
    pub country_code: String,
    /// Digits kept (from the right) when building the canonical form.
    pub national_digits: usize,
    /// Candidates with fewer digits after stripping are dropped entirely.
    pub min_digits: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BulkConfig {
    pub max_concurrency: usize,
    pub retry_failed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
            user_agent: "Mozilla/5.0 (compatible; ContactScraper/1.0)".to_string(),
            scheme_fallback: true,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            junk_email_domains: vec![
                "sentry.wixpress.com".to_string(),
                "sentry.io".to_string(),
                "wixpress.com".to_string(),
            ],
            phone: PhoneConfig::default(),
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            pattern: r"\b(?:\+91[-\s]?|0)?([6-9][0-9]{9})\b".to_string(),
            country_code: "+91".to_string(),
            national_digits: 10,
            min_digits: 10,
        }
    }
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 12,
            retry_failed: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "out".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
