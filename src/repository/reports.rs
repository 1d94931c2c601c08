//! Custom reports and report drafts

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    config::DraftsConfig,
    models::{CustomReport, ReportDraft},
};

#[derive(Clone)]
pub struct ReportsRepository {
    reports: Arc<RwLock<Vec<CustomReport>>>,
}

impl ReportsRepository {
    pub fn new(seed: Vec<CustomReport>) -> Self {
        Self {
            reports: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn list(&self) -> Vec<CustomReport> {
        self.reports.read().await.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<CustomReport> {
        self.reports.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn insert(&self, report: CustomReport) -> CustomReport {
        self.reports.write().await.push(report.clone());
        report
    }

    /// Sets the `selected` flag; `None` if the report does not exist
    pub async fn set_selected(&self, id: &str, selected: bool) -> Option<CustomReport> {
        let mut reports = self.reports.write().await;
        let report = reports.iter_mut().find(|r| r.id == id)?;
        report.selected = selected;
        Some(report.clone())
    }
}

/// A draft with the staff member who opened it
#[derive(Debug, Clone)]
pub struct StoredDraft {
    pub owner: String,
    pub opened_at: DateTime<Utc>,
    pub draft: ReportDraft,
}

impl StoredDraft {
    fn is_live(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.opened_at < ttl
    }
}

/// Drafts being composed, keyed by handle.
///
/// A draft is only visible to its owner; other staff get `None` as if it did
/// not exist. Expired drafts are dropped whenever a draft is opened and are
/// invisible until then. Each owner keeps at most `max_per_staff` drafts.
#[derive(Clone)]
pub struct DraftsRepository {
    drafts: Arc<RwLock<HashMap<Uuid, StoredDraft>>>,
    max_per_staff: usize,
    ttl: Duration,
}

impl DraftsRepository {
    pub fn new(limits: &DraftsConfig) -> Self {
        Self {
            drafts: Arc::new(RwLock::new(HashMap::new())),
            max_per_staff: limits.max_per_staff.max(1),
            ttl: Duration::minutes(limits.ttl_minutes),
        }
    }

    pub async fn create(&self, owner: &str, draft: ReportDraft) -> Uuid {
        self.create_at(owner, draft, Utc::now()).await
    }

    async fn create_at(&self, owner: &str, draft: ReportDraft, now: DateTime<Utc>) -> Uuid {
        let mut drafts = self.drafts.write().await;
        drafts.retain(|_, stored| stored.is_live(now, self.ttl));

        let mut owned: Vec<(Uuid, DateTime<Utc>)> = drafts
            .iter()
            .filter(|(_, stored)| stored.owner == owner)
            .map(|(id, stored)| (*id, stored.opened_at))
            .collect();
        owned.sort_by_key(|(_, opened_at)| *opened_at);
        let excess = (owned.len() + 1).saturating_sub(self.max_per_staff);
        for (id, _) in owned.into_iter().take(excess) {
            drafts.remove(&id);
            tracing::debug!(draft_id = %id, owner, "Evicted oldest report draft");
        }

        let id = Uuid::new_v4();
        drafts.insert(
            id,
            StoredDraft {
                owner: owner.to_string(),
                opened_at: now,
                draft,
            },
        );
        id
    }

    fn visible<'a>(&self, stored: &'a StoredDraft, owner: &str) -> Option<&'a StoredDraft> {
        (stored.owner == owner && stored.is_live(Utc::now(), self.ttl)).then_some(stored)
    }

    pub async fn get(&self, id: Uuid, owner: &str) -> Option<ReportDraft> {
        let drafts = self.drafts.read().await;
        let stored = drafts.get(&id)?;
        self.visible(stored, owner).map(|s| s.draft.clone())
    }

    /// Runs a transition on a draft under the write lock and stores its result
    pub async fn apply<R>(
        &self,
        id: Uuid,
        owner: &str,
        transition: impl FnOnce(ReportDraft) -> (ReportDraft, R),
    ) -> Option<(ReportDraft, R)> {
        let mut drafts = self.drafts.write().await;
        self.visible(drafts.get(&id)?, owner)?;
        let stored = drafts.remove(&id)?;
        let (next, output) = transition(stored.draft);
        drafts.insert(
            id,
            StoredDraft {
                draft: next.clone(),
                ..stored
            },
        );
        Some((next, output))
    }

    /// Removes a draft, handing it to the caller
    pub async fn take(&self, id: Uuid, owner: &str) -> Option<StoredDraft> {
        let mut drafts = self.drafts.write().await;
        self.visible(drafts.get(&id)?, owner)?;
        drafts.remove(&id)
    }

    /// Puts back a draft previously taken
    pub async fn restore(&self, id: Uuid, stored: StoredDraft) {
        self.drafts.write().await.insert(id, stored);
    }

    pub async fn count(&self) -> usize {
        self.drafts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafts(max_per_staff: usize) -> DraftsRepository {
        DraftsRepository::new(&DraftsConfig {
            max_per_staff,
            ttl_minutes: 60,
        })
    }

    fn draft(name: &str) -> ReportDraft {
        ReportDraft::new(name.to_string(), "#123456".to_string())
    }

    #[tokio::test]
    async fn test_drafts_are_private_to_their_owner() {
        let repo = drafts(5);
        let id = repo.create("staff-2", draft("Parking")).await;

        assert!(repo.get(id, "staff-2").await.is_some());
        assert!(repo.get(id, "staff-1").await.is_none());
        assert!(repo.apply(id, "staff-1", |d| (d, ())).await.is_none());
        assert!(repo.take(id, "staff-1").await.is_none());

        assert!(repo.take(id, "staff-2").await.is_some());
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest_of_same_owner() {
        let repo = drafts(2);
        let start = Utc::now();
        let first = repo.create_at("staff-2", draft("A"), start).await;
        let second = repo.create_at("staff-2", draft("B"), start + Duration::seconds(1)).await;
        let other = repo.create_at("staff-3", draft("C"), start + Duration::seconds(2)).await;
        let third = repo.create_at("staff-2", draft("D"), start + Duration::seconds(3)).await;

        assert!(repo.get(first, "staff-2").await.is_none());
        assert!(repo.get(second, "staff-2").await.is_some());
        assert!(repo.get(third, "staff-2").await.is_some());
        assert!(repo.get(other, "staff-3").await.is_some());
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn test_expired_drafts_are_dropped() {
        let repo = drafts(5);
        let stale = repo
            .create_at("staff-2", draft("Old"), Utc::now() - Duration::minutes(90))
            .await;
        assert!(repo.get(stale, "staff-2").await.is_none());

        repo.create("staff-4", draft("New")).await;
        assert_eq!(repo.count().await, 1);
    }
}
