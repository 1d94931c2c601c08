//! Staff endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{staff::CreateStaffMember, StaffMember},
};

use super::AuthenticatedUser;

/// List staff
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Staff members", body = Vec<StaffMember>)
    )
)]
pub async fn list_staff(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<StaffMember>>> {
    Ok(Json(state.services.auth.list_staff().await))
}

/// Add a staff member (supervisors only)
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    request_body = CreateStaffMember,
    responses(
        (status = 201, description = "Staff member created", body = StaffMember),
        (status = 400, description = "Invalid form", body = crate::error::ErrorResponse),
        (status = 403, description = "Insufficient permissions", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateStaffMember>,
) -> AppResult<(StatusCode, Json<StaffMember>)> {
    claims.require_supervisor()?;
    let member = state.services.auth.create_staff(data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}
