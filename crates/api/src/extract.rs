//! JSON body extractor with schema validation.

use axum::extract::{FromRequest, Request};
use axum::Json;
use lunchbox_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Like [`axum::Json`], but also runs [`Validate`] and rejects with
/// [`AppError`] so every input failure shares the API error schema.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateOrder>) -> AppResult<()> { .. }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))?;
        Ok(Self(value))
    }
}
