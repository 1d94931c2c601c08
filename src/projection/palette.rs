//! Display labels and colors for statuses and categories

use crate::models::{Priority, RequestStatus, RequestType, SiteStatus, UrgentLogType};

const GREEN: &str = "#2e7d32";
const ORANGE: &str = "#ed6c02";
const RED: &str = "#d32f2f";
const BLUE: &str = "#0288d1";
const GREY: &str = "#757575";

impl RequestStatus {
    pub fn color(&self) -> &'static str {
        match self {
            RequestStatus::Pending => ORANGE,
            RequestStatus::Completed => GREEN,
            RequestStatus::Cancelled => GREY,
            RequestStatus::Rejected => RED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

impl RequestType {
    pub fn label(&self) -> &'static str {
        match self {
            RequestType::Leave => "Leave",
            RequestType::ShiftChange => "Shift Change",
            RequestType::Overtime => "Overtime",
            RequestType::Other => "Other",
        }
    }
}

impl Priority {
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Low => GREEN,
            Priority::Medium => ORANGE,
            Priority::High => RED,
        }
    }
}

impl SiteStatus {
    pub fn color(&self) -> &'static str {
        match self {
            SiteStatus::Online => GREEN,
            SiteStatus::Offline => GREY,
            SiteStatus::Alert => RED,
        }
    }
}

impl UrgentLogType {
    pub fn color(&self) -> &'static str {
        match self {
            UrgentLogType::Started | UrgentLogType::Completed => GREEN,
            UrgentLogType::Alert => ORANGE,
            UrgentLogType::Incident => RED,
            UrgentLogType::Late => BLUE,
        }
    }

    /// Whether the log needs a supervisor's attention
    pub fn is_urgent(&self) -> bool {
        matches!(
            self,
            UrgentLogType::Alert | UrgentLogType::Incident | UrgentLogType::Late
        )
    }
}
