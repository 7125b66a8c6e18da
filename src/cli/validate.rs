use std::path::Path;
use crate::cli::commands::ValidateArgs;
use crate::config::parse_config;
use crate::errors::DashboardError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), DashboardError> {
    let config = parse_config(Path::new(&args.config)).await?;
    println!("Configuration is valid: {}", args.config);
    println!("  upstream:  {}", config.upstream.base_url);
    println!(
        "  grouping:  separator {:?}, prefix length {}, prefer organization id: {}",
        config.grouping.separator, config.grouping.fallback_prefix_len, config.grouping.prefer_organization_id
    );
    println!(
        "  filtering: VMs {}, workstations {}",
        config.summary.vm_filter_non_positive, config.summary.workstation_filter_non_positive
    );
    Ok(())
}
