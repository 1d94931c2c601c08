//! Liveness and readiness checks

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Record counts of the in-memory store
#[derive(Serialize, ToSchema)]
pub struct StoreCounts {
    pub requests: usize,
    pub reports: usize,
    pub sites: usize,
    pub staff: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub store: StoreCounts,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check, with the size of each seeded collection
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Store loaded", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(State(state): State<crate::AppState>) -> Json<ReadinessResponse> {
    let services = &state.services;
    let store = StoreCounts {
        requests: services.requests.count().await,
        reports: services.reports.list().await.len(),
        sites: services.sites.list().len(),
        staff: services.auth.list_staff().await.len(),
    };
    Json(ReadinessResponse {
        status: "ready".to_string(),
        store,
    })
}
