// src/api/download.rs
use std::path::Path;

use rocket::fs::NamedFile;
use rocket::{get, State};

use crate::server::ServerState;

/// Serves a previously generated report by name; unknown names 404.
#[get("/download/<filename>")]
pub async fn download_report(state: &State<ServerState>, filename: &str) -> Option<NamedFile> {
    if !is_artifact_name(filename) {
        return None;
    }

    let path = Path::new(&state.config.output.directory).join(filename);
    NamedFile::open(path).await.ok()
}

/// Artifact names are flat uuid-qualified files; anything path-shaped is
/// not ours to serve.
fn is_artifact_name(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::is_artifact_name;

    #[test]
    fn accepts_flat_report_names() {
        assert!(is_artifact_name(
            "results_67e5504410b1426f9247bb680e5fe0c8.csv"
        ));
    }

    #[test]
    fn rejects_traversal_shaped_names() {
        assert!(!is_artifact_name("../etc/passwd"));
        assert!(!is_artifact_name("reports/../../secret.csv"));
        assert!(!is_artifact_name("a\\b.csv"));
        assert!(!is_artifact_name(""));
    }
}
