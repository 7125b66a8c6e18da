use axum::{extract::State, Json};
use crate::api::AppState;
use crate::models::ReportData;
use crate::pipeline::build_report;

pub async fn get_summary(State(state): State<AppState>) -> Json<ReportData> {
    Json(build_report(state.upstream.as_ref(), &state.config).await)
}
