use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use order::ValidationErrors;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Service is under maintenance")]
    Maintenance(Option<String>),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Maintenance(_) => "MAINTENANCE",
            ApiError::Validation(_) => "VALIDATION",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Maintenance(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        // validation failures carry the per-field breakdown
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "code": self.code(),
                "message": self.to_string(),
                "errors": errors.errors,
            }),
            ApiError::Maintenance(message) => json!({
                "code": self.code(),
                "message": message.as_deref().unwrap_or("Service is under maintenance"),
            }),
            _ => json!({
                "code": self.code(),
                "message": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
