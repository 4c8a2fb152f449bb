use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item '{0}' not found")]
    NotFound(String),

    #[error("Item with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Store call '{operation}' timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::DuplicateName(_) => AppError::Conflict(err.to_string()),
            ItemError::Validation(msg) => AppError::UnprocessableEntity(msg),
            ItemError::Timeout { .. } => AppError::GatewayTimeout(err.to_string()),
            ItemError::Database(msg) => {
                // Driver detail stays in the logs.
                tracing::error!(error = %msg, "Item store failure");
                AppError::InternalServerError(ErrorCode::DatabaseError.default_message().to_string())
            }
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Database(err.to_string())
    }
}
