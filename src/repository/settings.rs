//! Settings panels store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{NotificationPreference, ScheduleSettings, SettingsPanel, SettingsPanelKind};

#[derive(Clone)]
pub struct SettingsRepository {
    notifications: Arc<RwLock<Vec<NotificationPreference>>>,
    schedule: Arc<RwLock<ScheduleSettings>>,
}

impl SettingsRepository {
    pub fn new(notifications: Vec<NotificationPreference>, schedule: ScheduleSettings) -> Self {
        Self {
            notifications: Arc::new(RwLock::new(notifications)),
            schedule: Arc::new(RwLock::new(schedule)),
        }
    }

    pub async fn get(&self, kind: SettingsPanelKind) -> SettingsPanel {
        match kind {
            SettingsPanelKind::Notifications => SettingsPanel::Notifications {
                preferences: self.notifications.read().await.clone(),
            },
            SettingsPanelKind::Schedule => SettingsPanel::Schedule {
                schedule: self.schedule.read().await.clone(),
            },
        }
    }

    /// Replaces the whole content of one panel
    pub async fn replace(&self, panel: SettingsPanel) {
        match panel {
            SettingsPanel::Notifications { preferences } => {
                *self.notifications.write().await = preferences;
            }
            SettingsPanel::Schedule { schedule } => {
                *self.schedule.write().await = schedule;
            }
        }
    }
}
