//! Derived views over the in-memory store
//!
//! Everything here is pure: callers pass the records (and the current date
//! where relevant) and get a freshly computed projection back.

pub mod palette;
pub mod report_search;
pub mod request_filter;

use chrono::NaiveDate;

pub use report_search::search_reports;
pub use request_filter::{project_requests, select_by_status, StatusSelector};

/// Current calendar day in the server's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
