use crate::cli::commands::ReportArgs;
use crate::cli::load_config;
use crate::errors::DashboardError;
use crate::pipeline::build_report;
use crate::reporting::format_report_text;
use crate::upstream::UpstreamClient;

pub async fn handle_report(args: ReportArgs) -> Result<(), DashboardError> {
    let config = load_config(&args.upstream).await?;
    let client = UpstreamClient::new(&config.upstream)?;
    let report = build_report(&client, &config).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report_text(&report));
    }
    Ok(())
}
