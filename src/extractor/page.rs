// src/extractor/page.rs
use scraper::{Html, Selector};

/// An anchor element as found in the document, in document order.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub href: String,
    pub text: String,
}

pub struct PageContent {
    pub text: String,
    pub links: Vec<PageLink>,
}

/// Reduce a raw HTML document to the two things extraction works on:
/// whitespace-normalized visible text and the document's anchors.
pub fn parse_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let body_selector = Selector::parse("body").unwrap();
    let text = document
        .select(&body_selector)
        .next()
        .map(|body| {
            body.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    let link_selector = Selector::parse("a[href]").unwrap();
    let links = document
        .select(&link_selector)
        .filter_map(|element| {
            element.value().attr("href").map(|href| PageLink {
                href: href.to_string(),
                text: element
                    .text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" "),
            })
        })
        .collect();

    PageContent { text, links }
}
