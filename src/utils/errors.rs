use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application error taxonomy. Every variant maps to a client-facing status
/// code and a `{"error": ...}` JSON body; nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record absent, or already in the state that makes the operation
    /// meaningless (e.g. deleting an already-deleted row).
    #[error("{0}")]
    NotFound(String),

    /// A student points at a missing or soft-deleted parent/class.
    #[error("{0}")]
    InvalidReference(String),

    /// Phone number already belongs to another active parent.
    #[error("{0}")]
    DuplicatePhoneNumber(String),

    /// Full (PUT) update omitted a mandatory field.
    #[error("{0}")]
    MissingRequiredField(String),

    /// Restore blocked because a referenced parent/class is still deleted.
    #[error("{0}")]
    DependencyNotRestorable(String),

    /// Field-level constraint violation (age range, name length, phone format).
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidReference(_)
            | AppError::DuplicatePhoneNumber(_)
            | AppError::MissingRequiredField(_) => StatusCode::BAD_REQUEST,
            AppError::DependencyNotRestorable(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        AppError::Validation(message)
    }
}
