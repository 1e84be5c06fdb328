use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One row of the final report: the outcome of extracting contacts from a
/// single input URL. Exactly one of "extraction succeeded" (`error` is None,
/// sets possibly empty) or "extraction failed" (`error` set, sets empty)
/// holds. `contact_page` is None only when extraction never got past the
/// home fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResult {
    pub url: String,
    pub contact_page: Option<String>,
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    pub error: Option<String>,
}

impl SiteResult {
    pub fn failure(url: &str, reason: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            contact_page: None,
            emails: BTreeSet::new(),
            phones: BTreeSet::new(),
            error: Some(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
