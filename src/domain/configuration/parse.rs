//! Pure parse/validate for service configuration (`sgq.toml`).

use crate::domain::{AppError, ServiceConfig};

/// Parse and validate service configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ServiceConfig, AppError> {
    let config: ServiceConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
