//! `ApiJson` extractor — JSON request bodies whose rejections use the
//! standard error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use vms_core::error::AppError;

use crate::error::ApiError;

/// JSON body extractor that reports malformed or missing bodies as
/// validation errors instead of Axum's plain-text rejections.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text()).into()),
        }
    }
}
