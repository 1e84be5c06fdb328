// src/server/routes.rs
// Health and service-info routes; extraction routes live in the api module.

pub mod health {
    use rocket::{get, serde::json::Json};
    use serde_json::{json, Value};

    #[get("/health")]
    pub async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "service": "contact-scraper-api"
        }))
    }

    #[get("/")]
    pub async fn index() -> Json<Value> {
        Json(json!({
            "name": "Contact Scraper API",
            "version": "0.1.0",
            "description": "Extracts contact emails and phone numbers from websites",
            "endpoints": {
                "health": "/api/health",
                "extract": "/api/extract?url=<url>",
                "extract_bulk": "/api/extract/bulk",
                "extract_upload": "/api/extract/upload",
                "download": "/api/download/<filename>"
            }
        }))
    }
}
