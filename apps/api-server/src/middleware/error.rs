//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;
use validator::ValidationErrors;
use vita_core::error::RepoError;
use vita_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Validation(Vec<String>),
}

impl AppError {
    pub fn not_found(entity_type: &str, id: impl fmt::Display) -> Self {
        AppError::NotFound(format!("{} with id {} not found", entity_type, id))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Validation(errors) => ErrorResponse::validation_failed(errors.join(", ")),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => AppError::not_found(entity_type, id),
            RepoError::Conflict(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        // Schema-level checks are keyed `__all__`.
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
