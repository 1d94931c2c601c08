//! API handlers for Guardpost REST endpoints

pub mod auth;
pub mod health;
pub mod openapi;
pub mod reports;
pub mod requests;
pub mod settings;
pub mod sites;
pub mod staff;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{delete, get, post, put},
    Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::StaffClaims, AppState};

/// Extractor for authenticated staff from JWT token
pub struct AuthenticatedUser(pub StaffClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Authentication("Missing or invalid authorization header".to_string()))?;

        let claims = StaffClaims::from_token(bearer.token(), &state.config.auth.jwt_secret)?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Requests
        .route("/requests", get(requests::list_requests).post(requests::create_request))
        .route("/requests/status/*status", get(requests::list_requests_by_status))
        .route("/requests/:id", get(requests::get_request))
        .route("/requests/:id/status", put(requests::update_request_status))
        // Custom reports
        .route("/reports", get(reports::list_reports))
        .route("/reports/search", get(reports::search_reports))
        .route("/reports/:id", get(reports::get_report))
        .route("/reports/:id/selected", put(reports::set_report_selected))
        .route("/reports/drafts", post(reports::create_draft))
        .route("/reports/drafts/:id", get(reports::get_draft).delete(reports::cancel_draft))
        .route("/reports/drafts/:id/fields", post(reports::add_draft_field))
        .route("/reports/drafts/:id/fields/:field_id", delete(reports::remove_draft_field))
        .route("/reports/drafts/:id/commit", post(reports::commit_draft))
        // Watch sites
        .route("/sites", get(sites::list_sites))
        .route("/sites/summary", get(sites::site_summary))
        .route("/sites/:id", get(sites::get_site))
        .route("/sites/:id/logs", get(sites::site_logs))
        .route("/sites/:id/map", get(sites::site_map))
        .route("/logs/urgent", get(sites::urgent_logs))
        // Staff
        .route("/staff", get(staff::list_staff).post(staff::create_staff))
        // Settings
        .route("/settings", put(settings::update_settings))
        .route("/settings/:panel", get(settings::get_settings))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
