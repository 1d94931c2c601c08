//! Settings service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{SettingsPanel, SettingsPanelKind},
    repository::Repository,
};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_panel(&self, kind: SettingsPanelKind) -> SettingsPanel {
        self.repository.settings.get(kind).await
    }

    /// Validate and store one panel, returning its stored content
    pub async fn update_panel(&self, panel: SettingsPanel) -> AppResult<SettingsPanel> {
        match &panel {
            SettingsPanel::Notifications { .. } => {}
            SettingsPanel::Schedule { schedule } => schedule.validate()?,
        }

        let kind = panel.kind();
        self.repository.settings.replace(panel).await;
        tracing::info!(panel = ?kind, "Settings updated");
        Ok(self.repository.settings.get(kind).await)
    }
}
