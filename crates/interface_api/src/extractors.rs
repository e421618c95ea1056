//! Request extractors whose rejections go through `ApiError`
//!
//! Client errors from the body or the path become empty 400 responses
//! instead of axum's plain-text rejection bodies.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use domain_policy::validation::describe;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON extractor that rejects malformed or invalid bodies with 400
///
/// A body that fails to deserialize (bad JSON, a missing required field, a
/// wrongly typed value) and one that fails [`Validate`] are both reported
/// as `ApiError::Validation`, before the handler runs.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_policy(ValidatedJson(draft): ValidatedJson<PolicyDraft>) {
///     // draft is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::Validation(describe(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Path extractor that rejects unparseable segments with 400
///
/// ```rust,ignore
/// async fn get_policy(ValidatedPath(id): ValidatedPath<PolicyId>) {
///     // id is a parsed PolicyId
/// }
/// ```
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        Ok(ValidatedPath(value))
    }
}
