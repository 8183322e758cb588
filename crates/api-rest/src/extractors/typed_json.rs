//! Typed JSON extractor.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// JSON extractor that decodes the body into a typed payload.
///
/// Any decoding failure is reported through [`ApiError`], so a body whose
/// fields carry the wrong JSON types is rejected before a statement is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for TypedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(TypedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl<T> std::ops::Deref for TypedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for TypedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
