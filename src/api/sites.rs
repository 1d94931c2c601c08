//! Watch site endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        site::{MapQuery, MapResponse, SiteSummary, UrgentLogView},
        WatchSite,
    },
};

use super::AuthenticatedUser;

fn to_views(logs: Vec<crate::models::UrgentLog>) -> Vec<UrgentLogView> {
    logs.into_iter().map(UrgentLogView::from).collect()
}

/// List watch sites
#[utoipa::path(
    get,
    path = "/sites",
    tag = "sites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All watch sites", body = Vec<WatchSite>)
    )
)]
pub async fn list_sites(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<WatchSite>>> {
    Ok(Json(state.services.sites.list()))
}

/// Site counts per status
#[utoipa::path(
    get,
    path = "/sites/summary",
    tag = "sites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts per status", body = SiteSummary)
    )
)]
pub async fn site_summary(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<SiteSummary>> {
    Ok(Json(state.services.sites.summary()))
}

/// Get a watch site
#[utoipa::path(
    get,
    path = "/sites/{id}",
    tag = "sites",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Site ID")),
    responses(
        (status = 200, description = "Site details", body = WatchSite),
        (status = 404, description = "No such site", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_site(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<WatchSite>> {
    state
        .services
        .sites
        .get_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Site {} not found", id)))
}

/// Logs of one site, newest first
#[utoipa::path(
    get,
    path = "/sites/{id}/logs",
    tag = "sites",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Site ID")),
    responses(
        (status = 200, description = "Site logs", body = Vec<UrgentLogView>)
    )
)]
pub async fn site_logs(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<UrgentLogView>>> {
    Ok(Json(to_views(state.services.sites.logs_for_site(&id))))
}

/// Map widget URL of a site
#[utoipa::path(
    get,
    path = "/sites/{id}/map",
    tag = "sites",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Site ID"), MapQuery),
    responses(
        (status = 200, description = "Embed URL", body = MapResponse),
        (status = 404, description = "No map for this site", body = crate::error::ErrorResponse)
    )
)]
pub async fn site_map(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
    Query(query): Query<MapQuery>,
) -> AppResult<Json<MapResponse>> {
    let map = state.services.sites.map_url(&id, query.view.unwrap_or_default())?;
    Ok(Json(map))
}

/// Alerts, incidents and late check-ins across all sites
#[utoipa::path(
    get,
    path = "/logs/urgent",
    tag = "sites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Urgent logs, newest first", body = Vec<UrgentLogView>)
    )
)]
pub async fn urgent_logs(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<UrgentLogView>>> {
    Ok(Json(to_views(state.services.sites.urgent_logs())))
}
