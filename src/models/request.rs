//! Staff request model (leave, shift change, overtime)

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{Priority, RequestStatus, RequestType};

/// Request record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    /// Display name of the requester
    pub requested_by: String,
    pub requested_by_id: String,
    /// ISO date (YYYY-MM-DD). Kept verbatim; unparseable values never match a time window.
    pub requested_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
}

/// Create request payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    #[serde(default)]
    pub priority: Priority,
    /// Requested date (YYYY-MM-DD), defaults to today
    pub requested_date: Option<String>,
    pub attachments: Option<Vec<String>>,
}

/// Respond to a request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatus {
    pub status: RequestStatus,
    pub message: Option<String>,
    /// Defaults to the authenticated staff member's name
    pub responded_by: Option<String>,
}

/// Time window selector of the request drawer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TimeWindow {
    #[default]
    All,
    Today,
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "This Month")]
    ThisMonth,
}

/// Query parameters of the request drawer
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct RequestQuery {
    /// Selected tab (0=pending, 1=completed, 2=cancelled/rejected, absent or other=all)
    pub tab: Option<i64>,
    /// Time window: All, Today, This Week, This Month
    pub filter: Option<TimeWindow>,
}

/// Request decorated with display colors
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestView {
    #[serde(flatten)]
    pub request: Request,
    pub type_label: String,
    pub status_color: String,
    pub priority_color: String,
}

impl From<Request> for RequestView {
    fn from(request: Request) -> Self {
        RequestView {
            type_label: request.request_type.label().to_string(),
            status_color: request.status.color().to_string(),
            priority_color: request.priority.color().to_string(),
            request,
        }
    }
}
