//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, health, reports, requests, settings, sites, staff};

/// Registers the bearer token scheme referenced by secured paths
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Guardpost API",
        version = "1.0.0",
        description = "Staff and security-guard management console REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&BearerAuth),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Requests
        requests::list_requests,
        requests::list_requests_by_status,
        requests::get_request,
        requests::create_request,
        requests::update_request_status,
        // Reports
        reports::list_reports,
        reports::search_reports,
        reports::get_report,
        reports::set_report_selected,
        reports::create_draft,
        reports::get_draft,
        reports::add_draft_field,
        reports::remove_draft_field,
        reports::commit_draft,
        reports::cancel_draft,
        // Sites
        sites::list_sites,
        sites::site_summary,
        sites::get_site,
        sites::site_logs,
        sites::site_map,
        sites::urgent_logs,
        // Staff
        staff::list_staff,
        staff::create_staff,
        // Settings
        settings::get_settings,
        settings::update_settings,
    ),
    components(
        schemas(
            // Auth
            auth::LoginResponse,
            crate::models::staff::LoginRequest,
            // Requests
            crate::models::request::Request,
            crate::models::request::RequestView,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequestStatus,
            crate::models::request::TimeWindow,
            crate::models::enums::RequestType,
            crate::models::enums::RequestStatus,
            crate::models::enums::Priority,
            requests::RequestsListResponse,
            // Reports
            crate::models::report::CustomReport,
            crate::models::report::ReportField,
            crate::models::report::NewReportField,
            crate::models::report::CreateDraft,
            crate::models::report::ReportDraft,
            crate::models::report::DraftView,
            crate::models::report::ReportSearch,
            crate::models::report::SetSelected,
            crate::models::enums::FieldType,
            // Sites
            crate::models::site::WatchSite,
            crate::models::site::Coordinates,
            crate::models::site::UrgentLog,
            crate::models::site::UrgentLogView,
            crate::models::site::MapView,
            crate::models::site::MapResponse,
            crate::models::site::SiteSummary,
            crate::models::enums::SiteStatus,
            crate::models::enums::UrgentLogType,
            // Staff
            crate::models::staff::StaffMember,
            crate::models::staff::CreateStaffMember,
            crate::models::enums::StaffRole,
            // Settings
            crate::models::settings::SettingsPanel,
            crate::models::settings::SettingsPanelKind,
            crate::models::settings::NotificationPreference,
            crate::models::settings::NotificationCategory,
            crate::models::settings::ScheduleSettings,
            crate::models::settings::WeekDay,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            health::StoreCounts,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "requests", description = "Staff requests"),
        (name = "reports", description = "Custom reports and report builder"),
        (name = "sites", description = "Watch sites and logs"),
        (name = "staff", description = "Staff management"),
        (name = "settings", description = "Console settings")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
