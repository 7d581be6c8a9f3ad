use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    /// Malformed query string or JSON body
    #[error("Request binding error: {0}")]
    BindError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Deserialization error: {0}")]
    DeserializeError(String),

    #[error("K8s API error: {0}")]
    K8sApiError(String),
}

impl From<anyhow::Error> for AppError {
    /// Classifies by the root cause; the message keeps the whole context chain.
    fn from(err: anyhow::Error) -> Self {
        let message = format!("{err:#}");

        if err.chain().any(|cause| cause.is::<kube::Error>()) {
            AppError::K8sApiError(message)
        } else if err.chain().any(|cause| cause.is::<serde_json::Error>()) {
            AppError::DeserializeError(message)
        } else if err.chain().any(|cause| cause.is::<validator::ValidationErrors>()) {
            AppError::ValidationError(message)
        } else {
            AppError::InternalServerError(message)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!("Request failed: {}", self);

        // Callers get one failure status regardless of cause
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let body = Json(json!({
            "msg": self.to_string(),
            "data": null,
        }));

        (status, body).into_response()
    }
}
