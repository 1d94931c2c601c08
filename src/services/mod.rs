//! Business logic services

pub mod auth;
pub mod reports;
pub mod requests;
pub mod settings;
pub mod sites;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub requests: requests::RequestsService,
    pub reports: reports::ReportsService,
    pub sites: sites::SitesService,
    pub settings: settings::SettingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            requests: requests::RequestsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository.clone()),
            sites: sites::SitesService::new(repository.clone()),
            settings: settings::SettingsService::new(repository),
        }
    }
}
