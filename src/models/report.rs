//! Custom report models and the report builder state machine

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::FieldType;
use crate::error::{AppError, AppResult};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

// ---------------------------------------------------------------------------
// CustomReport
// ---------------------------------------------------------------------------

/// A report type that guards fill in on site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomReport {
    pub id: String,
    pub name: String,
    /// Badge color (#RRGGBB)
    pub color: String,
    /// Shown in the site's active report list
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ReportField>>,
}

/// One input of a custom report, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportField {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Add field payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReportField {
    #[validate(length(min = 1, message = "Field name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    pub options: Option<Vec<String>>,
}

impl NewReportField {
    /// Checks that choice fields carry at least one non-blank option
    pub fn check_options(&self) -> AppResult<()> {
        if !self.field_type.requires_options() {
            return Ok(());
        }
        let has_option = self
            .options
            .as_ref()
            .map(|opts| opts.iter().any(|o| !o.trim().is_empty()))
            .unwrap_or(false);
        if has_option {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "options: {:?} fields need at least one option",
                self.field_type
            )))
        }
    }

    pub fn into_field(self, id: String) -> ReportField {
        ReportField {
            id,
            name: self.name,
            field_type: self.field_type,
            required: self.required,
            options: self.options,
        }
    }
}

/// Start a new report draft
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDraft {
    #[validate(length(min = 1, message = "Report name is required"))]
    pub name: String,
    #[validate(regex(path = *HEX_COLOR, message = "Color must be a hex value like #4caf50"))]
    pub color: String,
}

/// Toggle whether a report is active for sites
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SetSelected {
    pub selected: bool,
}

/// Report search query
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ReportSearchQuery {
    /// Free text typed in the search box
    pub q: Option<String>,
}

/// Matching reports and whether to offer creating one named after the query
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSearch {
    pub matches: Vec<CustomReport>,
    pub show_create_option: bool,
}

// ---------------------------------------------------------------------------
// ReportDraft
// ---------------------------------------------------------------------------

/// A custom report being composed.
///
/// A draft is either `Empty` or `Composing` (at least one field). Committing
/// consumes the draft and yields an immutable [`CustomReport`]; cancelling just
/// drops it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReportDraft {
    Empty {
        name: String,
        color: String,
    },
    Composing {
        name: String,
        color: String,
        fields: Vec<ReportField>,
    },
}

impl ReportDraft {
    pub fn new(name: String, color: String) -> Self {
        ReportDraft::Empty { name, color }
    }

    pub fn name(&self) -> &str {
        match self {
            ReportDraft::Empty { name, .. } | ReportDraft::Composing { name, .. } => name,
        }
    }

    pub fn fields(&self) -> &[ReportField] {
        match self {
            ReportDraft::Empty { .. } => &[],
            ReportDraft::Composing { fields, .. } => fields,
        }
    }

    /// Appends a field at the end of the display order
    pub fn add_field(self, field: ReportField) -> Self {
        match self {
            ReportDraft::Empty { name, color } => ReportDraft::Composing {
                name,
                color,
                fields: vec![field],
            },
            ReportDraft::Composing {
                name,
                color,
                mut fields,
            } => {
                fields.push(field);
                ReportDraft::Composing {
                    name,
                    color,
                    fields,
                }
            }
        }
    }

    /// Removes a field by id. Returns the draft unchanged and `false` if no such field.
    pub fn remove_field(self, field_id: &str) -> (Self, bool) {
        match self {
            ReportDraft::Empty { .. } => (self, false),
            ReportDraft::Composing {
                name,
                color,
                mut fields,
            } => {
                let before = fields.len();
                fields.retain(|f| f.id != field_id);
                let removed = fields.len() != before;
                let draft = if fields.is_empty() {
                    ReportDraft::Empty { name, color }
                } else {
                    ReportDraft::Composing {
                        name,
                        color,
                        fields,
                    }
                };
                (draft, removed)
            }
        }
    }

    /// Turns the draft into a report. Empty drafts are rejected and handed back.
    pub fn commit(self, id: String) -> Result<CustomReport, ReportDraft> {
        match self {
            ReportDraft::Empty { .. } => Err(self),
            ReportDraft::Composing {
                name,
                color,
                fields,
            } => Ok(CustomReport {
                id,
                name,
                color,
                selected: false,
                fields: Some(fields),
            }),
        }
    }
}

/// Draft together with its handle
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DraftView {
    pub id: Uuid,
    pub draft: ReportDraft,
}
