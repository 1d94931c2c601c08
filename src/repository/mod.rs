//! Repository layer over the in-memory store
//!
//! Nothing is persisted: every collection lives for the lifetime of the
//! process and is seeded from [`Fixtures`](crate::fixtures::Fixtures).

pub mod ids;
pub mod reports;
pub mod requests;
pub mod settings;
pub mod sites;
pub mod staff;

use crate::{config::DraftsConfig, fixtures::Fixtures};

/// Main repository struct, cheap to clone
#[derive(Clone)]
pub struct Repository {
    pub requests: requests::RequestsRepository,
    pub reports: reports::ReportsRepository,
    pub drafts: reports::DraftsRepository,
    pub sites: sites::SitesRepository,
    pub staff: staff::StaffRepository,
    pub settings: settings::SettingsRepository,
    pub ids: ids::IdGenerator,
}

impl Repository {
    /// Create a repository holding the given fixtures
    pub fn new(fixtures: Fixtures, drafts: &DraftsConfig) -> Self {
        let ids = ids::IdGenerator::new();
        Self {
            requests: requests::RequestsRepository::new(fixtures.requests, ids.clone()),
            reports: reports::ReportsRepository::new(fixtures.reports),
            drafts: reports::DraftsRepository::new(drafts),
            sites: sites::SitesRepository::new(fixtures.sites, fixtures.maps, fixtures.logs),
            staff: staff::StaffRepository::new(fixtures.staff, ids.clone()),
            settings: settings::SettingsRepository::new(fixtures.notifications, fixtures.schedule),
            ids,
        }
    }
}
