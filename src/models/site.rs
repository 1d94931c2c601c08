//! Watch site and urgent log models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::enums::{SiteStatus, UrgentLogType};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A monitored site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchSite {
    pub id: String,
    pub name: String,
    pub address: String,
    pub status: SiteStatus,
    pub cameras: u32,
    pub alerts: u32,
    pub incidents: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Event raised at a site. `site_id` is not checked against known sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UrgentLog {
    pub id: String,
    pub site_id: String,
    #[serde(rename = "type")]
    pub log_type: UrgentLogType,
    pub message: String,
    /// Sortable timestamp (YYYY-MM-DD HH:MM)
    pub timestamp: String,
}

/// Urgent log decorated with its display color
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UrgentLogView {
    #[serde(flatten)]
    pub log: UrgentLog,
    pub color: String,
}

impl From<UrgentLog> for UrgentLogView {
    fn from(log: UrgentLog) -> Self {
        UrgentLogView {
            color: log.log_type.color().to_string(),
            log,
        }
    }
}

/// Map widget variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MapView {
    #[default]
    Satellite,
    Street,
}

/// Embed URLs of the third-party map widget for one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteMap {
    pub satellite_url: String,
    pub street_url: String,
}

impl SiteMap {
    pub fn url(&self, view: MapView) -> &str {
        match view {
            MapView::Satellite => &self.satellite_url,
            MapView::Street => &self.street_url,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct MapQuery {
    /// satellite (default) or street
    pub view: Option<MapView>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    pub site_id: String,
    pub view: MapView,
    pub url: String,
}

/// Site counts per status for the dashboard header
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SiteSummary {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub alert: usize,
}
