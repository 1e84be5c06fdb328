// src/api/extract.rs
use rocket::serde::{json::Json, Deserialize, Serialize};
use rocket::{get, post, State};

use crate::api::ApiResponse;
use crate::models::SiteResult;
use crate::server::ServerState;

#[derive(Deserialize)]
pub struct BulkRequest {
    pub urls: Vec<String>,
}

#[derive(Serialize)]
pub struct BulkResponse {
    pub results: Vec<SiteResult>,
    /// Download link for the CSV artifact; the report itself is never
    /// embedded in the response.
    pub csv_url: String,
}

#[get("/extract?<url>")]
pub async fn extract_single(
    state: &State<ServerState>,
    url: String,
) -> Json<ApiResponse<SiteResult>> {
    Json(ApiResponse::success(state.scraper.scrape(&url).await))
}

#[post("/extract/bulk", data = "<request>")]
pub async fn extract_bulk(
    state: &State<ServerState>,
    request: Json<BulkRequest>,
) -> Json<ApiResponse<BulkResponse>> {
    run_bulk(state, request.into_inner().urls).await
}

/// Accepts an uploaded delimited file whose first column lists URLs.
#[post("/extract/upload", data = "<content>")]
pub async fn extract_upload(
    state: &State<ServerState>,
    content: String,
) -> Json<ApiResponse<BulkResponse>> {
    let urls = parse_url_column(&content);
    if urls.is_empty() {
        return Json(ApiResponse::error(
            "No URLs found in uploaded file".to_string(),
        ));
    }
    run_bulk(state, urls).await
}

async fn run_bulk(
    state: &State<ServerState>,
    urls: Vec<String>,
) -> Json<ApiResponse<BulkResponse>> {
    match state.orchestrator.run(urls).await {
        Ok(outcome) => Json(ApiResponse::success(BulkResponse {
            csv_url: format!("/api/download/{}", outcome.report.filename),
            results: outcome.results,
        })),
        Err(e) => Json(ApiResponse::error(e.to_string())),
    }
}

/// First column of each line, comma or semicolon delimited; one leading
/// header row is tolerated.
fn parse_url_column(content: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for (line_number, line) in content.lines().enumerate() {
        let first = line
            .split(&[',', ';'][..])
            .next()
            .unwrap_or("")
            .trim()
            .trim_matches('"')
            .trim();
        if first.is_empty() {
            continue;
        }
        if line_number == 0 && matches!(first.to_lowercase().as_str(), "url" | "urls" | "website")
        {
            continue;
        }
        urls.push(first.to_string());
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::parse_url_column;

    #[test]
    fn takes_the_first_column() {
        let urls = parse_url_column("example.com,Acme Inc\nother.org;Other\n");
        assert_eq!(urls, vec!["example.com", "other.org"]);
    }

    #[test]
    fn skips_a_header_row_and_blank_lines() {
        let urls = parse_url_column("URL,Name\n\nexample.com,Acme\n");
        assert_eq!(urls, vec!["example.com"]);
    }

    #[test]
    fn strips_quotes_and_whitespace() {
        let urls = parse_url_column("\"example.com\" ,Acme\n");
        assert_eq!(urls, vec!["example.com"]);
    }
}
