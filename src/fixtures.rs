//! Sample data loaded into the in-memory store at startup

use chrono::{Duration, NaiveDate};

use crate::models::{
    settings::NotificationCategory,
    site::Coordinates,
    CustomReport, FieldType, NotificationPreference, Priority, ReportField, Request, RequestStatus,
    RequestType, ScheduleSettings, SiteMap, SiteStatus, StaffMember, StaffRole, UrgentLog,
    UrgentLogType, WatchSite,
};

const MAP_EMBED_BASE: &str = "https://www.google.com/maps/embed/v1/view";

/// Initial content of every collection
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub requests: Vec<Request>,
    pub reports: Vec<CustomReport>,
    pub sites: Vec<WatchSite>,
    pub maps: Vec<(String, SiteMap)>,
    pub logs: Vec<UrgentLog>,
    pub staff: Vec<StaffMember>,
    pub notifications: Vec<NotificationPreference>,
    pub schedule: ScheduleSettings,
}

impl Fixtures {
    /// No records at all, default settings
    pub fn empty() -> Self {
        Self::default()
    }

    /// The console's sample dataset.
    ///
    /// Request dates are laid out relative to `today` so every time window of
    /// the request drawer has something to show. All staff share `password_hash`.
    pub fn seed(today: NaiveDate, password_hash: &str) -> Self {
        Self {
            requests: seed_requests(today),
            reports: seed_reports(),
            sites: seed_sites(),
            maps: seed_maps(),
            logs: seed_logs(),
            staff: seed_staff(password_hash),
            notifications: seed_notifications(),
            schedule: ScheduleSettings::default(),
        }
    }
}

fn days_ago(today: NaiveDate, days: i64) -> String {
    (today - Duration::days(days)).format("%Y-%m-%d").to_string()
}

fn seed_requests(today: NaiveDate) -> Vec<Request> {
    let base = |id: &str, title: &str, request_type, status, by: (&str, &str), age: i64, priority| {
        Request {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            request_type,
            status,
            requested_by: by.0.to_string(),
            requested_by_id: by.1.to_string(),
            requested_date: days_ago(today, age),
            response_date: None,
            responded_by: None,
            response_message: None,
            priority,
            attachments: None,
        }
    };
    let omar = ("Omar Haddad", "staff-3");
    let lena = ("Lena Novak", "staff-2");
    let theo = ("Theo Martin", "staff-4");

    let mut requests = vec![
        base("req-1001", "Annual leave, first week of next month", RequestType::Leave, RequestStatus::Pending, omar, 0, Priority::Medium),
        base("req-1002", "Swap Saturday night shift", RequestType::ShiftChange, RequestStatus::Pending, lena, 3, Priority::High),
        base("req-1003", "Overtime for warehouse inventory", RequestType::Overtime, RequestStatus::Pending, theo, 12, Priority::Low),
        base("req-1004", "Sick day", RequestType::Leave, RequestStatus::Completed, lena, 5, Priority::High),
        base("req-1005", "Extra radio battery", RequestType::Other, RequestStatus::Completed, omar, 20, Priority::Low),
        base("req-1006", "Move to day shifts", RequestType::ShiftChange, RequestStatus::Cancelled, theo, 2, Priority::Medium),
        base("req-1007", "Overtime on public holiday", RequestType::Overtime, RequestStatus::Rejected, omar, 45, Priority::Medium),
    ];

    for request in requests.iter_mut() {
        if request.status != RequestStatus::Pending {
            request.response_date = Some(request.requested_date.clone());
            request.responded_by = Some("Anna Keller".to_string());
        }
    }
    requests[0].description = "Family trip, already booked".to_string();
    requests[1].attachments = Some(vec!["swap-agreement.pdf".to_string()]);
    requests[6].response_message = Some("Holiday roster is already full".to_string());
    requests
}

fn field(id: &str, name: &str, field_type: FieldType, required: bool, options: Option<&[&str]>) -> ReportField {
    ReportField {
        id: id.to_string(),
        name: name.to_string(),
        field_type,
        required,
        options: options.map(|opts| opts.iter().map(|o| o.to_string()).collect()),
    }
}

fn seed_reports() -> Vec<CustomReport> {
    vec![
        CustomReport {
            id: "report-1".to_string(),
            name: "Incident".to_string(),
            color: "#d32f2f".to_string(),
            selected: true,
            fields: Some(vec![
                field("field-1", "Description", FieldType::Textarea, true, None),
                field("field-2", "Time of incident", FieldType::Time, true, None),
                field("field-3", "Severity", FieldType::Dropdown, true, Some(&["Low", "Medium", "High"])),
            ]),
        },
        CustomReport {
            id: "report-2".to_string(),
            name: "Patrol".to_string(),
            color: "#2e7d32".to_string(),
            selected: true,
            fields: Some(vec![
                field("field-4", "Checkpoint", FieldType::Text, true, None),
                field("field-5", "All clear", FieldType::Checkbox, false, None),
            ]),
        },
        CustomReport {
            id: "report-3".to_string(),
            name: "Visitor Log".to_string(),
            color: "#0288d1".to_string(),
            selected: false,
            fields: None,
        },
        CustomReport {
            id: "report-4".to_string(),
            name: "Maintenance".to_string(),
            color: "#ed6c02".to_string(),
            selected: false,
            fields: Some(vec![field("field-6", "Contact phone", FieldType::Phone, false, None)]),
        },
    ]
}

fn seed_sites() -> Vec<WatchSite> {
    let site = |id: &str, name: &str, address: &str, status, counts: (u32, u32, u32), coords: Option<(f64, f64)>| WatchSite {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        status,
        cameras: counts.0,
        alerts: counts.1,
        incidents: counts.2,
        coordinates: coords.map(|(lat, lng)| Coordinates { lat, lng }),
    };
    vec![
        site("site-1", "Harbour Warehouse", "12 Dock Road", SiteStatus::Online, (16, 0, 1), Some((51.5072, -0.1276))),
        site("site-2", "City Office Tower", "200 Main Street", SiteStatus::Alert, (42, 3, 0), Some((51.5155, -0.0922))),
        site("site-3", "North Retail Park", "5 Ring Avenue", SiteStatus::Offline, (8, 0, 0), None),
    ]
}

fn seed_maps() -> Vec<(String, SiteMap)> {
    [("site-1", "51.5072,-0.1276"), ("site-2", "51.5155,-0.0922")]
        .iter()
        .map(|(id, center)| {
            (
                id.to_string(),
                SiteMap {
                    satellite_url: format!("{}?center={}&zoom=17&maptype=satellite", MAP_EMBED_BASE, center),
                    street_url: format!("{}?center={}&zoom=17&maptype=roadmap", MAP_EMBED_BASE, center),
                },
            )
        })
        .collect()
}

fn seed_logs() -> Vec<UrgentLog> {
    let log = |id: &str, site_id: &str, log_type, message: &str, timestamp: &str| UrgentLog {
        id: id.to_string(),
        site_id: site_id.to_string(),
        log_type,
        message: message.to_string(),
        timestamp: timestamp.to_string(),
    };
    vec![
        log("log-1", "site-1", UrgentLogType::Started, "Night watch started", "2026-10-18 22:00"),
        log("log-2", "site-2", UrgentLogType::Alert, "Motion detected on floor 12", "2026-10-18 23:41"),
        log("log-3", "site-1", UrgentLogType::Incident, "Forced door at loading bay", "2026-10-19 02:17"),
        log("log-4", "site-3", UrgentLogType::Late, "Guard checked in 25 minutes late", "2026-10-18 22:25"),
        log("log-5", "site-1", UrgentLogType::Completed, "Night watch completed", "2026-10-19 06:00"),
    ]
}

fn seed_staff(password_hash: &str) -> Vec<StaffMember> {
    let member = |id: &str, name: &str, email: &str, phone: &str, role| StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role,
        password_hash: password_hash.to_string(),
    };
    vec![
        member("staff-1", "Anna Keller", "anna@guardpost.local", "0611111111", StaffRole::Supervisor),
        member("staff-2", "Lena Novak", "lena@guardpost.local", "0622222222", StaffRole::Guard),
        member("staff-3", "Omar Haddad", "omar@guardpost.local", "0633333333", StaffRole::Guard),
        member("staff-4", "Theo Martin", "theo@guardpost.local", "0644444444", StaffRole::Guard),
    ]
}

fn seed_notifications() -> Vec<NotificationPreference> {
    let pref = |id: &str, label: &str, category, email, sms, push| NotificationPreference {
        id: id.to_string(),
        label: label.to_string(),
        category,
        email,
        sms,
        push,
    };
    vec![
        pref("notif-1", "Site alerts", NotificationCategory::Alerts, true, true, true),
        pref("notif-2", "Incident reports", NotificationCategory::Incidents, true, false, true),
        pref("notif-3", "Late check-ins", NotificationCategory::Shifts, false, true, true),
        pref("notif-4", "New staff requests", NotificationCategory::Requests, true, false, false),
        pref("notif-5", "Submitted reports", NotificationCategory::Reports, false, false, true),
    ]
}
