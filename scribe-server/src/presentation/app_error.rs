use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Request-level failures, mapped onto the statuses and bodies existing
/// clients already depend on. 411 for validation failures is part of that
/// inherited contract.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid request body")]
    InvalidBody,

    #[error("invalid request id")]
    InvalidId,

    #[error("missing bearer token")]
    MissingBearerToken,

    #[error("unauthorized")]
    Unauthorized,

    #[error("cannot create user")]
    CannotCreateUser,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("store rejected operation")]
    StoreRejected,
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Validation(_) | AppError::InvalidBody => (
                StatusCode::LENGTH_REQUIRED,
                "Invalid request body".to_string(),
            ),
            AppError::InvalidId => (
                StatusCode::LENGTH_REQUIRED,
                "Invalid request id".to_string(),
            ),
            AppError::MissingBearerToken => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized: Missing Bearer token".to_string(),
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            AppError::CannotCreateUser => {
                (StatusCode::FORBIDDEN, "Cannot create user".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::FORBIDDEN, "Invalid credentials".to_string())
            }
            AppError::StoreRejected => (StatusCode::BAD_REQUEST, "Invalid".to_string()),
        };

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}
