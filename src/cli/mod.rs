pub mod commands;
pub mod report;
pub mod serve;
pub mod validate;

pub use commands::{Cli, Commands};

use std::path::Path;
use crate::cli::commands::UpstreamArgs;
use crate::config::{parse_config, validate_config, DashboardConfig};
use crate::errors::DashboardError;

/// Build the effective configuration: the config file if given, then the
/// URL and token from flags or environment on top.
pub async fn load_config(args: &UpstreamArgs) -> Result<DashboardConfig, DashboardError> {
    let mut config = match &args.config {
        Some(path) => parse_config(Path::new(path)).await?,
        None => DashboardConfig::default(),
    };

    if let Some(url) = &args.url {
        config.upstream.base_url = url.clone();
    }
    if let Some(token) = &args.token {
        config.upstream.token = Some(token.clone());
    }

    validate_config(&config)?;
    Ok(config)
}
