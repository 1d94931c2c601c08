//! Guardpost staff management console server
//!
//! REST JSON API behind the guard-management console: staff requests, custom
//! report authoring, watch site monitoring, staff accounts and settings. All
//! data lives in memory and is seeded from fixtures at startup.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod projection;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire services over a repository built from `fixtures`
    pub fn new(config: AppConfig, fixtures: fixtures::Fixtures) -> Self {
        let repository = repository::Repository::new(fixtures, &config.drafts);
        let services = services::Services::new(repository, config.auth.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
