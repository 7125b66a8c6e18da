use crate::cli::commands::ServeArgs;
use crate::cli::load_config;
use crate::errors::DashboardError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), DashboardError> {
    let config = load_config(&args.upstream).await?;
    info!(host = %args.host, port = args.port, upstream = %config.upstream.base_url, "Starting dashboard server");

    let state = api::create_app_state(config)?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| DashboardError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
