use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "vspc-dashboard", version, about = "Backup storage size dashboard for a Veeam Service Provider Console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTML dashboard over HTTP
    Serve(ServeArgs),
    /// Build one report and print it
    Report(ReportArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Upstream connection settings shared by commands that talk to the API.
#[derive(Args, Clone, Default)]
pub struct UpstreamArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Upstream API base URL (overrides the config file)
    #[arg(long, env = "VSPC_URL")]
    pub url: Option<String>,

    /// Upstream bearer token (overrides the config file)
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
