//! Watch sites service

use crate::{
    error::{AppError, AppResult},
    models::{
        site::{MapResponse, MapView, SiteSummary},
        SiteStatus, UrgentLog, WatchSite,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct SitesService {
    repository: Repository,
}

impl SitesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<WatchSite> {
        self.repository.sites.list()
    }

    pub fn get_by_id(&self, id: &str) -> Option<WatchSite> {
        self.repository.sites.get_by_id(id)
    }

    pub fn summary(&self) -> SiteSummary {
        self.repository
            .sites
            .list()
            .iter()
            .fold(SiteSummary::default(), |mut summary, site| {
                summary.total += 1;
                match site.status {
                    SiteStatus::Online => summary.online += 1,
                    SiteStatus::Offline => summary.offline += 1,
                    SiteStatus::Alert => summary.alert += 1,
                }
                summary
            })
    }

    /// Logs of one site, newest first
    pub fn logs_for_site(&self, site_id: &str) -> Vec<UrgentLog> {
        let mut logs = self.repository.sites.logs_for_site(site_id);
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs
    }

    /// Logs that need attention across all sites, newest first
    pub fn urgent_logs(&self) -> Vec<UrgentLog> {
        let mut logs: Vec<UrgentLog> = self
            .repository
            .sites
            .logs()
            .into_iter()
            .filter(|log| log.log_type.is_urgent())
            .collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs
    }

    pub fn map_url(&self, site_id: &str, view: MapView) -> AppResult<MapResponse> {
        let map = self
            .repository
            .sites
            .map_for(site_id)
            .ok_or_else(|| AppError::NotFound(format!("No map for site {}", site_id)))?;
        Ok(MapResponse {
            site_id: site_id.to_string(),
            view,
            url: map.url(view).to_string(),
        })
    }
}
