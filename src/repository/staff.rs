//! Staff accounts store

use std::sync::Arc;

use tokio::sync::RwLock;

use super::ids::IdGenerator;
use crate::{
    error::{AppError, AppResult},
    models::StaffMember,
};

#[derive(Clone)]
pub struct StaffRepository {
    staff: Arc<RwLock<Vec<StaffMember>>>,
    ids: IdGenerator,
}

impl StaffRepository {
    pub fn new(seed: Vec<StaffMember>, ids: IdGenerator) -> Self {
        Self {
            staff: Arc::new(RwLock::new(seed)),
            ids,
        }
    }

    pub async fn list(&self) -> Vec<StaffMember> {
        self.staff.read().await.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<StaffMember> {
        self.staff.read().await.iter().find(|s| s.id == id).cloned()
    }

    /// Emails compare case-insensitively
    pub async fn get_by_email(&self, email: &str) -> Option<StaffMember> {
        self.staff
            .read()
            .await
            .iter()
            .find(|s| s.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Adds a staff member under a fresh id, rejecting a taken email
    pub async fn add(&self, mut member: StaffMember) -> AppResult<StaffMember> {
        let mut staff = self.staff.write().await;
        if staff.iter().any(|s| s.email.eq_ignore_ascii_case(&member.email)) {
            return Err(AppError::Conflict(format!(
                "A staff member with email {} already exists",
                member.email
            )));
        }
        member.id = self.ids.next("staff");
        staff.push(member.clone());
        Ok(member)
    }
}
