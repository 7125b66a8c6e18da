use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::DashboardError;

impl IntoResponse for DashboardError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            DashboardError::Config(_) => StatusCode::BAD_REQUEST,
            DashboardError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
