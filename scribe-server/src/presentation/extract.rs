use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::presentation::app_error::AppError;

/// JSON body gate: a body that fails to deserialize or fails its schema
/// rules is rejected before the handler body runs, so the store is never
/// reached for malformed input.
pub(crate) struct ValidatedJson<T>(pub(crate) T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::InvalidBody)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
