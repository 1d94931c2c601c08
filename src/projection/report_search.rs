//! Custom report search box

use crate::models::{report::ReportSearch, CustomReport};

/// Filters reports by case-insensitive substring of their name.
///
/// The text is used as typed, whitespace included. The create option is
/// offered when it is non-empty and no report name equals it ignoring case.
/// Substring hits do not suppress it.
pub fn search_reports(reports: &[CustomReport], search_text: &str) -> ReportSearch {
    let needle = search_text.to_lowercase();

    let matches: Vec<CustomReport> = reports
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    let exact = reports.iter().any(|r| r.name.to_lowercase() == needle);

    ReportSearch {
        matches,
        show_create_option: !needle.is_empty() && !exact,
    }
}
