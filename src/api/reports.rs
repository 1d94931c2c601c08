//! Custom report endpoints (report list, search box, report builder)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        report::{CreateDraft, DraftView, NewReportField, ReportSearch, ReportSearchQuery, SetSelected},
        CustomReport,
    },
};

use super::AuthenticatedUser;

/// List custom reports
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All custom reports", body = Vec<CustomReport>)
    )
)]
pub async fn list_reports(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<CustomReport>>> {
    Ok(Json(state.services.reports.list().await))
}

/// Search reports by name
#[utoipa::path(
    get,
    path = "/reports/search",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportSearchQuery),
    responses(
        (status = 200, description = "Matching reports and create offer", body = ReportSearch)
    )
)]
pub async fn search_reports(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ReportSearchQuery>,
) -> AppResult<Json<ReportSearch>> {
    let text = query.q.unwrap_or_default();
    Ok(Json(state.services.reports.search(&text).await))
}

/// Get a custom report with its fields
#[utoipa::path(
    get,
    path = "/reports/{id}",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report details", body = CustomReport),
        (status = 404, description = "No such report", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_report(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<CustomReport>> {
    Ok(Json(state.services.reports.get_by_id(&id).await?))
}

/// Show or hide a report in the sites' active list
#[utoipa::path(
    put,
    path = "/reports/{id}/selected",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Report ID")),
    request_body = SetSelected,
    responses(
        (status = 200, description = "Report updated", body = CustomReport),
        (status = 404, description = "No such report", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_report_selected(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<SetSelected>,
) -> AppResult<Json<CustomReport>> {
    let report = state.services.reports.set_selected(&id, data.selected).await?;
    Ok(Json(report))
}

/// Start composing a new report
#[utoipa::path(
    post,
    path = "/reports/drafts",
    tag = "reports",
    security(("bearer_auth" = [])),
    request_body = CreateDraft,
    responses(
        (status = 201, description = "Draft opened", body = DraftView),
        (status = 400, description = "Invalid form", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_draft(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateDraft>,
) -> AppResult<(StatusCode, Json<DraftView>)> {
    let draft = state.services.reports.create_draft(&claims.staff_id, data).await?;
    Ok((StatusCode::CREATED, Json(draft)))
}

/// Get a draft
#[utoipa::path(
    get,
    path = "/reports/drafts/{id}",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Draft", body = DraftView),
        (status = 404, description = "No such draft for this staff member", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_draft(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DraftView>> {
    Ok(Json(state.services.reports.get_draft(&claims.staff_id, id).await?))
}

/// Append a field to a draft
#[utoipa::path(
    post,
    path = "/reports/drafts/{id}/fields",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Draft ID")),
    request_body = NewReportField,
    responses(
        (status = 200, description = "Draft with the new field", body = DraftView),
        (status = 400, description = "Invalid field", body = crate::error::ErrorResponse),
        (status = 404, description = "No such draft for this staff member", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_draft_field(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<NewReportField>,
) -> AppResult<Json<DraftView>> {
    Ok(Json(state.services.reports.add_field(&claims.staff_id, id, data).await?))
}

/// Remove a field from a draft
#[utoipa::path(
    delete,
    path = "/reports/drafts/{id}/fields/{field_id}",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Draft ID"),
        ("field_id" = String, Path, description = "Field ID")
    ),
    responses(
        (status = 200, description = "Draft without the field", body = DraftView),
        (status = 404, description = "No such draft or field", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_draft_field(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((id, field_id)): Path<(Uuid, String)>,
) -> AppResult<Json<DraftView>> {
    let draft = state
        .services
        .reports
        .remove_field(&claims.staff_id, id, &field_id)
        .await?;
    Ok(Json(draft))
}

/// Save a draft as a custom report
#[utoipa::path(
    post,
    path = "/reports/drafts/{id}/commit",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 201, description = "Report created", body = CustomReport),
        (status = 404, description = "No such draft for this staff member", body = crate::error::ErrorResponse),
        (status = 422, description = "Draft has no fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn commit_draft(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<CustomReport>)> {
    let report = state.services.reports.commit_draft(&claims.staff_id, id).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Discard a draft
#[utoipa::path(
    delete,
    path = "/reports/drafts/{id}",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 204, description = "Draft discarded"),
        (status = 404, description = "No such draft for this staff member", body = crate::error::ErrorResponse)
    )
)]
pub async fn cancel_draft(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.reports.cancel_draft(&claims.staff_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
