use std::path::Path;
use crate::errors::DashboardError;
use super::resolve_credential;
use super::types::DashboardConfig;
use tracing::debug;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<DashboardConfig, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(DashboardError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let mut config = parse_config_str(&content)?;

    config.upstream.token = config.upstream.token.as_deref().map(resolve_credential);
    debug!(path = %path.display(), upstream = ?config.upstream, "Loaded configuration");

    validate_config(&config)?;
    Ok(config)
}

/// Parse YAML text into a config. An empty document yields the defaults.
pub fn parse_config_str(content: &str) -> Result<DashboardConfig, DashboardError> {
    if content.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub fn validate_config(config: &DashboardConfig) -> Result<(), DashboardError> {
    let upstream = &config.upstream;
    if !(upstream.base_url.starts_with("http://") || upstream.base_url.starts_with("https://")) {
        return Err(DashboardError::Config(format!(
            "upstream.base_url must start with http:// or https://, got '{}'",
            upstream.base_url
        )));
    }
    if upstream.page_size == 0 {
        return Err(DashboardError::Config("upstream.page_size must be greater than 0".into()));
    }
    if upstream.timeout_secs == 0 {
        return Err(DashboardError::Config("upstream.timeout_secs must be greater than 0".into()));
    }
    if config.grouping.separator.is_empty() {
        return Err(DashboardError::Config("grouping.separator must not be empty".into()));
    }
    if config.grouping.fallback_prefix_len == 0 {
        return Err(DashboardError::Config("grouping.fallback_prefix_len must be greater than 0".into()));
    }
    Ok(())
}
