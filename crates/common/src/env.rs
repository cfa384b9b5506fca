//! Environment/runtime helpers
//!
//! Startup checks for the directories the site serves from.

use std::path::Path;

use tracing::{info, warn};

/// Check that the static frontend directory exists.
///
/// A missing directory is not fatal: the API keeps working and page routes
/// simply 404 until assets are deployed. Returns whether the directory exists.
pub async fn ensure_frontend(frontend_dir: &str) -> bool {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => {
            let has_index = tokio::fs::metadata(Path::new(frontend_dir).join("index.html"))
                .await
                .is_ok();
            if !has_index {
                warn!(%frontend_dir, "frontend directory has no index.html; unknown routes will 404");
            }
            info!(%frontend_dir, has_index, "frontend assets directory found");
            true
        }
        Ok(_) => {
            warn!(%frontend_dir, "frontend path is not a directory; static pages disabled");
            false
        }
        Err(_) => {
            warn!(%frontend_dir, "frontend assets directory not found; static pages may 404");
            false
        }
    }
}
