//! Describe command: a markdown document rendered as a JSON outline.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::domain::AppError;
use crate::services::outline;

/// Default document described when no path is given.
pub const DEFAULT_DESCRIBE_PATH: &str = "README.md";

pub fn execute(path: &Path) -> Result<Value, AppError> {
    let markdown = fs::read_to_string(path).map_err(|e| {
        AppError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    })?;
    info!(path = %path.display(), "Describing document");
    Ok(outline(&markdown))
}
