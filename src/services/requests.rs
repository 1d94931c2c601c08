//! Staff requests service

use crate::{
    error::{AppError, AppResult},
    models::{
        request::{CreateRequest, RequestQuery, UpdateRequestStatus},
        Request, RequestStatus, StaffClaims,
    },
    projection::{self, request_filter::parse_request_date},
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Request drawer content for the selected tab and time window
    pub async fn list_for_view(&self, query: &RequestQuery) -> Vec<Request> {
        let requests = self.repository.requests.get_all().await;
        let window = query.filter.unwrap_or_default();
        let view = projection::project_requests(&requests, query.tab, window, projection::today());
        tracing::debug!(tab = ?query.tab, ?window, shown = view.len(), "Projected request drawer");
        view
    }

    pub async fn count(&self) -> usize {
        self.repository.requests.count().await
    }

    pub async fn list_by_status(&self, status: &str) -> Vec<Request> {
        self.repository.requests.get_by_status(status).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Request> {
        self.repository
            .requests
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// File a new pending request on behalf of the authenticated staff member
    pub async fn create(&self, claims: &StaffClaims, data: CreateRequest) -> AppResult<Request> {
        validator::Validate::validate(&data)?;

        let requested_date = match data.requested_date {
            Some(date) => {
                let parsed = parse_request_date(&date).ok_or_else(|| {
                    AppError::Validation(format!("requestedDate: invalid date {}", date))
                })?;
                parsed.format("%Y-%m-%d").to_string()
            }
            None => projection::today().format("%Y-%m-%d").to_string(),
        };

        let request = Request {
            id: String::new(),
            title: data.title,
            description: data.description,
            request_type: data.request_type,
            status: RequestStatus::Pending,
            requested_by: claims.name.clone(),
            requested_by_id: claims.staff_id.clone(),
            requested_date,
            response_date: None,
            responded_by: None,
            response_message: None,
            priority: data.priority,
            attachments: data.attachments,
        };

        let request = self.repository.requests.add(request).await;
        tracing::info!(request_id = %request.id, kind = %request.request_type, "Request created");
        Ok(request)
    }

    /// Record a response. `None` when the request does not exist.
    pub async fn update_status(
        &self,
        claims: &StaffClaims,
        id: &str,
        data: UpdateRequestStatus,
    ) -> Option<Request> {
        let responded_by = data.responded_by.or_else(|| Some(claims.name.clone()));
        let updated = self
            .repository
            .requests
            .update_status(id, data.status, data.message, responded_by)
            .await;

        match &updated {
            Some(request) => {
                tracing::info!(request_id = %id, status = %request.status, "Request status updated")
            }
            None => tracing::debug!(request_id = %id, "Status update for unknown request"),
        }
        updated
    }
}
