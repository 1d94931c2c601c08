//! Settings endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{SettingsPanel, SettingsPanelKind},
};

use super::AuthenticatedUser;

/// Get one settings panel
#[utoipa::path(
    get,
    path = "/settings/{panel}",
    tag = "settings",
    security(("bearer_auth" = [])),
    params(("panel" = SettingsPanelKind, Path, description = "notifications or schedule")),
    responses(
        (status = 200, description = "Panel content", body = SettingsPanel)
    )
)]
pub async fn get_settings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(panel): Path<SettingsPanelKind>,
) -> AppResult<Json<SettingsPanel>> {
    Ok(Json(state.services.settings.get_panel(panel).await))
}

/// Replace one settings panel (supervisors only)
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = SettingsPanel,
    responses(
        (status = 200, description = "Settings updated", body = SettingsPanel),
        (status = 400, description = "Invalid settings", body = crate::error::ErrorResponse),
        (status = 403, description = "Insufficient permissions", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(panel): Json<SettingsPanel>,
) -> AppResult<Json<SettingsPanel>> {
    claims.require_supervisor()?;

    let settings = state.services.settings.update_panel(panel).await?;
    Ok(Json(settings))
}
