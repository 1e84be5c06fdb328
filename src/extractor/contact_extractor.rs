// src/extractor/contact_extractor.rs
use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::extractor::page::PageLink;
use crate::models::Result;

/// Candidate contacts extracted from a single page. Merged by set union
/// across the home and contact pages before they become part of a result.
#[derive(Debug, Default)]
pub struct ExtractedContacts {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
}

impl ExtractedContacts {
    pub fn merge(&mut self, other: ExtractedContacts) {
        self.emails.extend(other.emails);
        self.phones.extend(other.phones);
    }
}

/// Scans visible text and links for email addresses and phone numbers.
/// Regex extraction over free text is noisy (CSS hashes, tracking pixels,
/// version strings); the junk-domain filter and digit-count validation are
/// what keep the output usable. Pure function of its inputs.
pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    config: ExtractionConfig,
}

impl ContactExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let email_regex =
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
        // The phone shape is deployment configuration, so its compilation
        // can fail on bad input.
        let phone_regex = Regex::new(&config.phone.pattern)?;

        Ok(Self {
            email_regex,
            phone_regex,
            config: config.clone(),
        })
    }

    pub fn extract(&self, text: &str, links: &[PageLink]) -> ExtractedContacts {
        let mut contacts = ExtractedContacts::default();

        for m in self.email_regex.find_iter(text) {
            contacts.emails.insert(m.as_str().to_string());
        }
        for link in links {
            if let Some(target) = link.href.strip_prefix("mailto:") {
                let address = target.split('?').next().unwrap_or("").trim();
                if !address.is_empty() {
                    contacts.emails.insert(address.to_string());
                }
            }
        }
        contacts.emails.retain(|email| !self.is_junk_email(email));

        for caps in self.phone_regex.captures_iter(text) {
            let candidate = caps.get(1).or_else(|| caps.get(0));
            if let Some(m) = candidate {
                if let Some(phone) = self.normalize_phone(m.as_str()) {
                    contacts.phones.insert(phone);
                }
            }
        }
        for link in links {
            if let Some(target) = link.href.strip_prefix("tel:") {
                if let Some(phone) = self.normalize_phone(target) {
                    contacts.phones.insert(phone);
                }
            }
        }

        debug!(
            "Extracted {} emails, {} phones",
            contacts.emails.len(),
            contacts.phones.len()
        );
        contacts
    }

    /// Substring match on the domain part, so `errors.sentry.io` is caught
    /// by a `sentry.io` entry.
    fn is_junk_email(&self, email: &str) -> bool {
        let domain = email.rsplit('@').next().unwrap_or("");
        self.config
            .junk_email_domains
            .iter()
            .any(|junk| domain.contains(junk.as_str()))
    }

    /// Strip to digits, require the configured minimum, keep the last
    /// `national_digits` and prepend the country code. Anything shorter is
    /// dropped entirely rather than emitted truncated.
    fn normalize_phone(&self, raw: &str) -> Option<String> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let phone = &self.config.phone;
        if digits.len() < phone.min_digits || digits.len() < phone.national_digits {
            return None;
        }
        let national = &digits[digits.len() - phone.national_digits..];
        Some(format!("{}{}", phone.country_code, national))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ContactExtractor {
        ContactExtractor::new(&ExtractionConfig::default()).unwrap()
    }

    fn link(href: &str) -> PageLink {
        PageLink {
            href: href.to_string(),
            text: String::new(),
        }
    }

    #[test]
    fn finds_emails_in_text_and_mailto_links() {
        let contacts = extractor().extract(
            "Write to sales@example.com for a quote.",
            &[link("mailto:support@example.com")],
        );

        assert!(contacts.emails.contains("sales@example.com"));
        assert!(contacts.emails.contains("support@example.com"));
        assert_eq!(contacts.emails.len(), 2);
    }

    #[test]
    fn mailto_query_string_is_stripped() {
        let contacts = extractor().extract("", &[link("mailto:hi@example.com?subject=Hello")]);
        assert!(contacts.emails.contains("hi@example.com"));
        assert_eq!(contacts.emails.len(), 1);
    }

    #[test]
    fn junk_domains_are_filtered_including_subdomains() {
        let contacts = extractor().extract(
            "real@example.com abc123@sentry.wixpress.com def@errors.sentry.io",
            &[],
        );

        assert!(contacts.emails.contains("real@example.com"));
        assert_eq!(contacts.emails.len(), 1);
    }

    #[test]
    fn duplicate_candidates_collapse() {
        let contacts = extractor().extract(
            "hi@example.com and again hi@example.com",
            &[link("mailto:hi@example.com")],
        );
        assert_eq!(contacts.emails.len(), 1);
    }

    #[test]
    fn national_numbers_get_the_country_code() {
        let contacts = extractor().extract("Call 9876543210 today", &[]);
        assert!(contacts.phones.contains("+919876543210"));
        assert_eq!(contacts.phones.len(), 1);
    }

    #[test]
    fn prefixed_forms_normalize_to_the_same_number() {
        let contacts = extractor().extract(
            "Call +91 9876543210 or 09876543210",
            &[link("tel:+91-98765-43210")],
        );
        assert_eq!(contacts.phones.len(), 1);
        assert!(contacts.phones.contains("+919876543210"));
    }

    #[test]
    fn short_numbers_are_dropped_not_truncated() {
        let contacts = extractor().extract("", &[link("tel:12345")]);
        assert!(contacts.phones.is_empty());
    }

    #[test]
    fn bad_phone_pattern_is_rejected() {
        let mut config = ExtractionConfig::default();
        config.phone.pattern = "([0-9".to_string();
        assert!(ContactExtractor::new(&config).is_err());
    }
}
