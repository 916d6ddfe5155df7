use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dashboard computation did not complete: {0}")]
    Computation(#[from] tokio::task::JoinError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Computation(join_err) => {
                tracing::error!(error = ?join_err, "Dashboard computation failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while computing the dashboard".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
