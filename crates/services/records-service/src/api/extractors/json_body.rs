//! JSON body extractor with application error rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// Like [`axum::Json`], but a malformed body, a missing or mistyped field,
/// or a wrong content type is answered with a 400 error envelope.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_user(JsonBody(user): JsonBody<User>) {
///     // every field of `user` is present and well-typed
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected request body: {}", e.body_text());
            AppError::from(e)
        })?;

        Ok(JsonBody(value))
    }
}
