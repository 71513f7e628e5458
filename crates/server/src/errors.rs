use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

/// Error response of the JSON API.
///
/// A not-found error renders as a bare 404 with no body; every other kind
/// renders `{"error", "message", "details"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    body: Option<ErrorBody>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, body: Some(ErrorBody { error, message, details: None }) }
    }

    pub fn validation(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: Some(ErrorBody { error: "Validation Error", message: Some(message.into()), details }),
        }
    }

    pub fn not_found() -> Self {
        Self { status: StatusCode::NOT_FOUND, body: None }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(message.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::validation(msg, None),
            ServiceError::Model(models::errors::ModelError::Validation(msg)) => Self::validation(msg, None),
            other => {
                error!(err = %other, "request failed in store");
                Self::internal(other.to_string())
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
