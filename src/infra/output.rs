use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::AppResult;

/// Writes `document` to `path`, replacing any existing file. Failures are
/// logged and reported as `false`.
pub fn save(path: &Path, document: &str) -> bool {
    match write_document(path, document) {
        Ok(()) => {
            info!(path = %path.display(), "Change logs saved to {}", path.display());
            true
        }
        Err(err) => {
            error!(path = %path.display(), error = ?err, "Error saving change logs: {err}");
            false
        }
    }
}

fn write_document(path: &Path, document: &str) -> AppResult<()> {
    fs::write(path, document)?;
    Ok(())
}
