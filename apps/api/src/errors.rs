use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::session::StoreError;
use crate::workflow::Slot;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required input missing; rejected before any AI call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The transition's guard does not hold in the current state.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// A previous AI failure has not been acknowledged yet.
    #[error("An earlier error must be cleared first: {0}")]
    ErrorPending(String),

    #[error("A {0} request is already in flight")]
    Busy(Slot),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Collapsed request/decode failure from the gateway; the message is user-facing.
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Precondition(msg) => {
                (StatusCode::CONFLICT, "PRECONDITION_FAILED", msg.clone())
            }
            AppError::ErrorPending(msg) => (StatusCode::CONFLICT, "ERROR_PENDING", msg.clone()),
            AppError::Busy(_) => (StatusCode::CONFLICT, "BUSY", self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Llm(msg) => (StatusCode::BAD_GATEWAY, "LLM_ERROR", msg.clone()),
            AppError::Storage(e) => {
                tracing::error!("Session storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "The session could not be saved".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
