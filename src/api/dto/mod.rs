//! Request/response shapes of the HTTP surface

pub mod workload_dto;

use serde::Serialize;

/// `{ "msg": ..., "data": ... }` envelope shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(msg: impl Into<String>, data: T) -> Self {
        Self {
            msg: msg.into(),
            data: Some(data),
        }
    }
}
