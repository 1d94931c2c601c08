//! Watch sites, their map embeds and urgent logs (read-only fixtures)

use std::sync::Arc;

use indexmap::IndexMap;

use crate::models::{SiteMap, UrgentLog, WatchSite};

#[derive(Clone)]
pub struct SitesRepository {
    sites: Arc<IndexMap<String, WatchSite>>,
    maps: Arc<IndexMap<String, SiteMap>>,
    logs: Arc<Vec<UrgentLog>>,
}

impl SitesRepository {
    pub fn new(sites: Vec<WatchSite>, maps: Vec<(String, SiteMap)>, logs: Vec<UrgentLog>) -> Self {
        Self {
            sites: Arc::new(sites.into_iter().map(|s| (s.id.clone(), s)).collect()),
            maps: Arc::new(maps.into_iter().collect()),
            logs: Arc::new(logs),
        }
    }

    pub fn list(&self) -> Vec<WatchSite> {
        self.sites.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<WatchSite> {
        self.sites.get(id).cloned()
    }

    pub fn map_for(&self, site_id: &str) -> Option<SiteMap> {
        self.maps.get(site_id).cloned()
    }

    /// All logs in fixture order
    pub fn logs(&self) -> Vec<UrgentLog> {
        self.logs.as_ref().clone()
    }

    pub fn logs_for_site(&self, site_id: &str) -> Vec<UrgentLog> {
        self.logs
            .iter()
            .filter(|log| log.site_id == site_id)
            .cloned()
            .collect()
    }
}
