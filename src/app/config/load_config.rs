//! Service configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, ServiceConfig, parse_config_content};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "sgq.toml";

/// Load and validate the service configuration.
///
/// An explicitly named file must exist. Without one, `sgq.toml` is used when
/// present and built-in defaults otherwise. A relative `[prompts] dir` is
/// resolved against the config file's directory.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, AppError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if !config_path.exists() {
        if path.is_some() {
            return Err(AppError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        info!("No {} found; using default configuration", DEFAULT_CONFIG_FILE);
        return Ok(ServiceConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    let mut config = parse_config_content(&content)?;

    if let Some(dir) = config.prompts.dir.as_mut()
        && dir.is_relative()
        && let Some(parent) = config_path.parent()
    {
        *dir = parent.join(&*dir);
    }

    info!(path = %config_path.display(), "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn loads_file_and_resolves_prompt_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sgq.toml");
        fs::write(&path, "[retrieval]\ntop_k_cap = 7\n\n[prompts]\ndir = \"prompts\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.retrieval.top_k_cap, 7);
        assert_eq!(config.prompts.dir, Some(dir.path().join("prompts")));
    }

    #[test]
    fn invalid_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sgq.toml");
        fs::write(&path, "[corpus]\nmax_chunk_chars = 0\n").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }
}
