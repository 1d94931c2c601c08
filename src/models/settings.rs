//! Console settings panels (notification preferences, scheduling)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Alerts,
    Incidents,
    Shifts,
    Requests,
    Reports,
}

/// Delivery channels enabled for one kind of notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationPreference {
    pub id: String,
    pub label: String,
    pub category: NotificationCategory,
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSettings {
    #[validate(range(min = 1, max = 24, message = "Shift length must be between 1 and 24 hours"))]
    pub shift_length_hours: u8,
    pub week_starts_on: WeekDay,
    /// Minutes after shift start before a guard is reported late
    #[validate(range(max = 240, message = "Late threshold cannot exceed 240 minutes"))]
    pub late_threshold_minutes: u32,
    pub auto_assign_shifts: bool,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            shift_length_hours: 8,
            week_starts_on: WeekDay::Monday,
            late_threshold_minutes: 15,
            auto_assign_shifts: false,
        }
    }
}

/// Which settings panel to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SettingsPanelKind {
    Notifications,
    Schedule,
}

/// Content of one settings panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum SettingsPanel {
    Notifications {
        preferences: Vec<NotificationPreference>,
    },
    Schedule {
        schedule: ScheduleSettings,
    },
}

impl SettingsPanel {
    pub fn kind(&self) -> SettingsPanelKind {
        match self {
            SettingsPanel::Notifications { .. } => SettingsPanelKind::Notifications,
            SettingsPanel::Schedule { .. } => SettingsPanelKind::Schedule,
        }
    }
}
