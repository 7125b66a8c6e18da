use axum::{extract::State, response::Html};
use crate::api::AppState;
use crate::errors::DashboardError;
use crate::pipeline::build_report;
use crate::reporting::render_dashboard;

/// Every request pulls fresh data from upstream; there is no cache.
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let report = build_report(state.upstream.as_ref(), &state.config).await;
    Ok(Html(render_dashboard(&report)?))
}
