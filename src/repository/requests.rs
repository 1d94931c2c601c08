//! Requests store

use std::sync::Arc;

use tokio::sync::RwLock;

use super::ids::IdGenerator;
use crate::{
    models::{Request, RequestStatus},
    projection::{self, StatusSelector},
};

#[derive(Clone)]
pub struct RequestsRepository {
    requests: Arc<RwLock<Vec<Request>>>,
    ids: IdGenerator,
}

impl RequestsRepository {
    pub fn new(seed: Vec<Request>, ids: IdGenerator) -> Self {
        Self {
            requests: Arc::new(RwLock::new(seed)),
            ids,
        }
    }

    /// Snapshot of every request in insertion order
    pub async fn get_all(&self) -> Vec<Request> {
        self.requests.read().await.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Request> {
        self.requests.read().await.iter().find(|r| r.id == id).cloned()
    }

    /// Requests with the given status. Accepts the `cancelled/rejected`
    /// composite; unknown values yield an empty list.
    pub async fn get_by_status(&self, status: &str) -> Vec<Request> {
        match StatusSelector::parse(status) {
            Some(selector) => projection::select_by_status(&self.requests.read().await, selector),
            None => Vec::new(),
        }
    }

    /// Stores a new request under a fresh `req-<millis>` id
    pub async fn add(&self, mut request: Request) -> Request {
        request.id = self.ids.next("req");
        self.requests.write().await.push(request.clone());
        request
    }

    /// Records a response on a request, replacing it in its slot.
    ///
    /// Returns `None` when no request has this id; the store is left untouched.
    pub async fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
        message: Option<String>,
        responded_by: Option<String>,
    ) -> Option<Request> {
        let mut requests = self.requests.write().await;
        let slot = requests.iter_mut().find(|r| r.id == id)?;

        let updated = Request {
            status,
            response_date: Some(projection::today().format("%Y-%m-%d").to_string()),
            response_message: message,
            responded_by,
            ..slot.clone()
        };
        *slot = updated.clone();
        Some(updated)
    }

    pub async fn count(&self) -> usize {
        self.requests.read().await.len()
    }
}
