use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::user::{SigninRequest, SignupRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::extract::ValidatedJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignupDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) full_name: String,
    #[validate(email)]
    pub(crate) email: String,
    #[validate(length(min = 1))]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct SigninDto {
    #[validate(email)]
    pub(crate) email: String,
    #[validate(length(min = 1))]
    pub(crate) password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthResponseDto {
    pub(crate) message: String,
    pub(crate) token: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/user/signup",
    tag = "user",
    request_body = SignupDto,
    responses(
        (status = 200, description = "User created, token issued", body = AuthResponseDto),
        (status = 411, description = "Invalid request body"),
        (status = 403, description = "Cannot create user")
    )
)]
pub(crate) async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupDto>,
) -> AppResult<(StatusCode, Json<AuthResponseDto>)> {
    let req = SignupRequest {
        full_name: dto.full_name,
        email: dto.email,
        password: dto.password,
    };

    let result = state.auth_service.signup(req).await.map_err(|err| match err {
        DomainError::Validation { .. } => AppError::InvalidBody,
        _ => AppError::CannotCreateUser,
    })?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            message: "Successfully created".to_string(),
            token: result.token,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/signin",
    tag = "user",
    request_body = SigninDto,
    responses(
        (status = 200, description = "Signed in, token issued", body = AuthResponseDto),
        (status = 411, description = "Invalid request body"),
        (status = 403, description = "No matching credentials")
    )
)]
pub(crate) async fn signin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SigninDto>,
) -> AppResult<(StatusCode, Json<AuthResponseDto>)> {
    let req = SigninRequest {
        email: dto.email,
        password: dto.password,
    };

    let result = state.auth_service.signin(req).await.map_err(|err| match err {
        DomainError::Validation { .. } => AppError::InvalidBody,
        _ => AppError::InvalidCredentials,
    })?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            message: "Successfully signed in".to_string(),
            token: result.token,
        }),
    ))
}
