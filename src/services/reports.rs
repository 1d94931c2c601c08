//! Custom reports service: search, selection and the report builder

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        report::{CreateDraft, DraftView, NewReportField, ReportSearch},
        CustomReport, ReportDraft,
    },
    projection,
    repository::{reports::StoredDraft, Repository},
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

fn draft_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Report draft {} not found", id))
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<CustomReport> {
        self.repository.reports.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<CustomReport> {
        self.repository
            .reports
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    pub async fn search(&self, text: &str) -> ReportSearch {
        let reports = self.repository.reports.list().await;
        projection::search_reports(&reports, text)
    }

    pub async fn set_selected(&self, id: &str, selected: bool) -> AppResult<CustomReport> {
        self.repository
            .reports
            .set_selected(id, selected)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    // ---- Drafts ----

    pub async fn create_draft(&self, owner: &str, data: CreateDraft) -> AppResult<DraftView> {
        data.validate()?;
        let draft = ReportDraft::new(data.name, data.color);
        let id = self.repository.drafts.create(owner, draft.clone()).await;
        tracing::debug!(draft_id = %id, owner, "Report draft opened");
        Ok(DraftView { id, draft })
    }

    pub async fn get_draft(&self, owner: &str, id: Uuid) -> AppResult<DraftView> {
        let draft = self
            .repository
            .drafts
            .get(id, owner)
            .await
            .ok_or_else(|| draft_not_found(id))?;
        Ok(DraftView { id, draft })
    }

    pub async fn add_field(&self, owner: &str, id: Uuid, data: NewReportField) -> AppResult<DraftView> {
        data.validate()?;
        data.check_options()?;

        let field = data.into_field(self.repository.ids.next("field"));
        let (draft, ()) = self
            .repository
            .drafts
            .apply(id, owner, |draft| (draft.add_field(field), ()))
            .await
            .ok_or_else(|| draft_not_found(id))?;
        Ok(DraftView { id, draft })
    }

    pub async fn remove_field(&self, owner: &str, id: Uuid, field_id: &str) -> AppResult<DraftView> {
        let (draft, removed) = self
            .repository
            .drafts
            .apply(id, owner, |draft| draft.remove_field(field_id))
            .await
            .ok_or_else(|| draft_not_found(id))?;

        if !removed {
            return Err(AppError::NotFound(format!("Field {} not found in draft", field_id)));
        }
        Ok(DraftView { id, draft })
    }

    /// Save the draft as a new report. The draft is gone afterwards.
    pub async fn commit_draft(&self, owner: &str, id: Uuid) -> AppResult<CustomReport> {
        let StoredDraft {
            owner: draft_owner,
            opened_at,
            draft,
        } = self
            .repository
            .drafts
            .take(id, owner)
            .await
            .ok_or_else(|| draft_not_found(id))?;

        match draft.commit(self.repository.ids.next("report")) {
            Ok(report) => {
                tracing::info!(report_id = %report.id, name = %report.name, "Custom report created");
                Ok(self.repository.reports.insert(report).await)
            }
            Err(draft) => {
                let stored = StoredDraft {
                    owner: draft_owner,
                    opened_at,
                    draft,
                };
                self.repository.drafts.restore(id, stored).await;
                Err(AppError::BusinessRule(
                    "A report needs at least one field before it can be saved".to_string(),
                ))
            }
        }
    }

    /// Discard a draft and every field added to it
    pub async fn cancel_draft(&self, owner: &str, id: Uuid) -> AppResult<()> {
        self.repository
            .drafts
            .take(id, owner)
            .await
            .map(|_| ())
            .ok_or_else(|| draft_not_found(id))
    }
}
