//! Data models for Guardpost

pub mod enums;
pub mod report;
pub mod request;
pub mod settings;
pub mod site;
pub mod staff;

// Re-export commonly used types
pub use enums::{FieldType, Priority, RequestStatus, RequestType, SiteStatus, StaffRole, UrgentLogType};
pub use report::{CustomReport, ReportDraft, ReportField};
pub use request::{Request, TimeWindow};
pub use settings::{NotificationPreference, ScheduleSettings, SettingsPanel, SettingsPanelKind};
pub use site::{SiteMap, UrgentLog, WatchSite};
pub use staff::{StaffClaims, StaffMember};
