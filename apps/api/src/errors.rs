use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::random_user::RandomUserError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The wrapped string names the missing resource, e.g. "Job with id 5".
    #[error("{0} was not found")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Random user error: {0}")]
    RandomUser(#[from] RandomUserError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Uniform error envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub details: String,
}

impl AppError {
    fn status_message_details(&self) -> (StatusCode, String, &'static str) {
        match self {
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                format!("Error: {what} was not found!"),
                "NOT_FOUND",
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone(), "CONFLICT"),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone(), "VALIDATION_ERROR")
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.to_string(),
                    "DATABASE_ERROR",
                )
            }
            AppError::RandomUser(e) => {
                tracing::error!("Random user fetch failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.to_string(),
                    "UPSTREAM_ERROR",
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.to_string(),
                    "INTERNAL_ERROR",
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = self.status_message_details();
        let body = Json(ErrorEnvelope {
            timestamp: Utc::now(),
            message,
            details: details.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_message_and_maps_to_404() {
        let err = AppError::NotFound("Job with id 5".to_string());
        let (status, message, details) = err.status_message_details();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Error: Job with id 5 was not found!");
        assert_eq!(details, "NOT_FOUND");
    }

    #[test]
    fn conflict_maps_to_409_with_plain_message() {
        let err = AppError::Conflict("Recruiter with email a@b already exists.".to_string());
        let (status, message, _) = err.status_message_details();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(message, "Recruiter with email a@b already exists.");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation("Salary should be in the format 'numK'".to_string());
        let (status, _, details) = err.status_message_details();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(details, "VALIDATION_ERROR");
    }

    #[test]
    fn envelope_serializes_expected_fields() {
        let envelope = ErrorEnvelope {
            timestamp: Utc::now(),
            message: "boom".to_string(),
            details: "INTERNAL_ERROR".to_string(),
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("timestamp").is_some());
        assert_eq!(json["message"], "boom");
        assert_eq!(json["details"], "INTERNAL_ERROR");
    }
}
