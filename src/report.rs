// src/report.rs
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{Result, SiteResult};

/// Handle to a written report artifact. `filename` is what the download
/// endpoint serves; `path` is where it landed on disk.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRef {
    pub filename: String,
    pub path: PathBuf,
}

/// Materialize the report: one header row, then one row per result in the
/// order given. Multi-value cells are comma-joined; the csv writer quotes
/// them as needed.
pub async fn write_report(results: &[SiteResult], dir: &Path) -> Result<ReportRef> {
    let filename = format!("results_{}.csv", Uuid::new_v4().simple());
    let path = dir.join(&filename);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["URL", "Contact Page", "Emails", "Phones", "Error"])?;
    for result in results {
        let emails = join_set(&result.emails);
        let phones = join_set(&result.phones);
        writer.write_record([
            result.url.as_str(),
            result.contact_page.as_deref().unwrap_or(""),
            emails.as_str(),
            phones.as_str(),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    tokio::fs::write(&path, bytes).await?;

    info!("📄 Report written to {}", path.display());
    Ok(ReportRef { filename, path })
}

fn join_set(values: &std::collections::BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}
