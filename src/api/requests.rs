//! Staff request endpoints (request drawer)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::request::{CreateRequest, Request, RequestQuery, RequestView, UpdateRequestStatus},
};

use super::AuthenticatedUser;

/// Requests list response
#[derive(Serialize, ToSchema)]
pub struct RequestsListResponse {
    pub requests: Vec<RequestView>,
    pub total: usize,
}

impl From<Vec<Request>> for RequestsListResponse {
    fn from(requests: Vec<Request>) -> Self {
        let requests: Vec<RequestView> = requests.into_iter().map(RequestView::from).collect();
        RequestsListResponse {
            total: requests.len(),
            requests,
        }
    }
}

/// List requests for a drawer tab and time window
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(RequestQuery),
    responses(
        (status = 200, description = "Requests list", body = RequestsListResponse)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<RequestQuery>,
) -> AppResult<Json<RequestsListResponse>> {
    let requests = state.services.requests.list_for_view(&query).await;
    Ok(Json(requests.into()))
}

/// List requests by status (`cancelled/rejected` selects both)
#[utoipa::path(
    get,
    path = "/requests/status/{status}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("status" = String, Path, description = "pending, completed, cancelled, rejected or cancelled/rejected")),
    responses(
        (status = 200, description = "Requests with this status, empty for unknown values", body = RequestsListResponse)
    )
)]
pub async fn list_requests_by_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(status): Path<String>,
) -> AppResult<Json<RequestsListResponse>> {
    let requests = state.services.requests.list_by_status(&status).await;
    Ok(Json(requests.into()))
}

/// Get request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = RequestView),
        (status = 404, description = "No such request", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<RequestView>> {
    let request = state.services.requests.get_by_id(&id).await?;
    Ok(Json(request.into()))
}

/// File a new request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = RequestView),
        (status = 400, description = "Invalid form", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<RequestView>)> {
    let request = state.services.requests.create(&claims, data).await?;
    Ok((StatusCode::CREATED, Json(request.into())))
}

/// Respond to a request (supervisors only)
#[utoipa::path(
    put,
    path = "/requests/{id}/status",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Request updated", body = RequestView),
        (status = 403, description = "Insufficient permissions", body = crate::error::ErrorResponse),
        (status = 404, description = "No such request", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_request_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<UpdateRequestStatus>,
) -> AppResult<Json<RequestView>> {
    claims.require_supervisor()?;
    let request = state
        .services
        .requests
        .update_status(&claims, &id, data)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;
    Ok(Json(request.into()))
}
