// src/extractor/locator.rs
use tracing::debug;
use url::Url;

use crate::extractor::page::PageLink;

const CONTACT_KEYWORDS: &[&str] = &[
    "contact",
    "contact-us",
    "contact_us",
    "get-in-touch",
    "get in touch",
    "support",
];

/// Pick the site's contact page from the homepage anchors: first anchor in
/// document order whose href or visible text contains a contact keyword,
/// resolved against the base URL. Targets that don't resolve to http(s)
/// (mailto:, javascript:) are skipped. No match means the homepage is
/// treated as its own contact page.
pub fn locate_contact_page(links: &[PageLink], base_url: &Url) -> Url {
    for link in links {
        let href = link.href.to_lowercase();
        let text = link.text.to_lowercase();
        if !CONTACT_KEYWORDS
            .iter()
            .any(|keyword| href.contains(keyword) || text.contains(keyword))
        {
            continue;
        }
        if let Ok(resolved) = base_url.join(&link.href) {
            if matches!(resolved.scheme(), "http" | "https") {
                debug!("Located contact page {} via {:?}", resolved, link.href);
                return resolved;
            }
        }
    }

    base_url.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, text: &str) -> PageLink {
        PageLink {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    fn base() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn matches_keyword_in_href() {
        let links = [link("/about", "About"), link("/contact-us", "Reach")];
        let located = locate_contact_page(&links, &base());
        assert_eq!(located.as_str(), "https://example.com/contact-us");
    }

    #[test]
    fn matches_keyword_in_visible_text() {
        let links = [link("/page-7", "Get in touch")];
        let located = locate_contact_page(&links, &base());
        assert_eq!(located.as_str(), "https://example.com/page-7");
    }

    #[test]
    fn first_match_wins() {
        let links = [
            link("/support", "Help"),
            link("/contact", "Contact"),
        ];
        let located = locate_contact_page(&links, &base());
        assert_eq!(located.as_str(), "https://example.com/support");
    }

    #[test]
    fn absolute_hrefs_pass_through() {
        let links = [link("https://help.example.com/contact", "Contact")];
        let located = locate_contact_page(&links, &base());
        assert_eq!(located.as_str(), "https://help.example.com/contact");
    }

    #[test]
    fn no_match_returns_base_url() {
        let links = [link("/pricing", "Pricing")];
        assert_eq!(locate_contact_page(&links, &base()), base());
    }

    #[test]
    fn non_web_schemes_are_skipped() {
        let links = [
            link("mailto:contact@example.com", "Contact"),
            link("/contact", "Contact"),
        ];
        let located = locate_contact_page(&links, &base());
        assert_eq!(located.as_str(), "https://example.com/contact");
    }
}
