//! Insurance policy handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::PolicyId;
use domain_policy::{InsurancePolicy, PolicyDraft};

use crate::error::ApiError;
use crate::export::{content_disposition, render_csv};
use crate::extractors::{ValidatedJson, ValidatedPath};
use crate::AppState;

/// Lists every policy record
pub async fn list_policies(
    State(state): State<AppState>,
) -> Result<Json<Vec<InsurancePolicy>>, ApiError> {
    Ok(Json(state.service.list_all().await?))
}

/// Gets a policy record by id
pub async fn get_policy(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<PolicyId>,
) -> Result<Json<InsurancePolicy>, ApiError> {
    state
        .service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Insurance policy {} not found", id)))
}

/// Creates a policy record
pub async fn create_policy(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<PolicyDraft>,
) -> Result<(StatusCode, Json<InsurancePolicy>), ApiError> {
    let created = state.service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces every mutable field of a policy record
pub async fn update_policy(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<PolicyId>,
    ValidatedJson(draft): ValidatedJson<PolicyDraft>,
) -> Result<Json<InsurancePolicy>, ApiError> {
    Ok(Json(state.service.update(id, draft).await?))
}

/// Deletes a policy record
pub async fn delete_policy(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<PolicyId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Exports every policy record as a CSV attachment
pub async fn export_policies(State(state): State<AppState>) -> Result<Response, ApiError> {
    let policies = state.service.list_all().await?;
    let body = render_csv(&policies);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition()),
        ],
        body,
    )
        .into_response())
}
