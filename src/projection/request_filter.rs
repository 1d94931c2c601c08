//! Request drawer projection: status buckets and time windows

use chrono::{DateTime, Duration, Months, NaiveDate};

use crate::models::{Request, RequestStatus, TimeWindow};

/// Composite selector value covering both closed-negative statuses
pub const CANCELLED_OR_REJECTED: &str = "cancelled/rejected";

/// Status selection as used by the drawer tabs and the by-status lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSelector {
    Exact(RequestStatus),
    CancelledOrRejected,
}

impl StatusSelector {
    /// Parses a status string. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        if value == CANCELLED_OR_REJECTED {
            return Some(StatusSelector::CancelledOrRejected);
        }
        value.parse().ok().map(StatusSelector::Exact)
    }

    /// Tab index to bucket. Indexes outside 0..=2 select no bucket.
    pub fn from_tab(tab: i64) -> Option<Self> {
        match tab {
            0 => Some(StatusSelector::Exact(RequestStatus::Pending)),
            1 => Some(StatusSelector::Exact(RequestStatus::Completed)),
            2 => Some(StatusSelector::CancelledOrRejected),
            _ => None,
        }
    }

    pub fn matches(&self, status: RequestStatus) -> bool {
        match self {
            StatusSelector::Exact(s) => *s == status,
            StatusSelector::CancelledOrRejected => {
                matches!(status, RequestStatus::Cancelled | RequestStatus::Rejected)
            }
        }
    }
}

/// Keeps the requests in `selector`, preserving order
pub fn select_by_status(requests: &[Request], selector: StatusSelector) -> Vec<Request> {
    requests
        .iter()
        .filter(|r| selector.matches(r.status))
        .cloned()
        .collect()
}

/// Earliest date kept by a time window, `None` for `All`
pub fn window_cutoff(window: TimeWindow, today: NaiveDate) -> Option<NaiveDate> {
    match window {
        TimeWindow::All => None,
        TimeWindow::Today => Some(today),
        TimeWindow::ThisWeek => Some(today - Duration::days(7)),
        // Calendar month back; the day is clamped (31 March -> 28/29 February)
        TimeWindow::ThisMonth => today.checked_sub_months(Months::new(1)).or(Some(today)),
    }
}

/// Parses a request date as a calendar day. Accepts `YYYY-MM-DD` or RFC 3339.
pub fn parse_request_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Computes the request list shown for `(tab, window)`.
///
/// Unparseable `requested_date` values are dropped whenever a window other than
/// `All` is active.
pub fn project_requests(
    requests: &[Request],
    tab: Option<i64>,
    window: TimeWindow,
    today: NaiveDate,
) -> Vec<Request> {
    let bucket = match tab.and_then(StatusSelector::from_tab) {
        Some(selector) => select_by_status(requests, selector),
        None => requests.to_vec(),
    };

    let Some(cutoff) = window_cutoff(window, today) else {
        return bucket;
    };

    bucket
        .into_iter()
        .filter(|r| {
            parse_request_date(&r.requested_date)
                .map(|d| d >= cutoff)
                .unwrap_or(false)
        })
        .collect()
}
