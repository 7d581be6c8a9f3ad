use anyhow::Result;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::AppError;

/// Map a domain Result<T> into Json<ApiResponse<T>> with AppError mapping.
pub fn to_json<T: serde::Serialize>(
    msg: &str,
    result: Result<T>,
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(msg, value))),
        Err(err) => Err(AppError::from(err)),
    }
}
