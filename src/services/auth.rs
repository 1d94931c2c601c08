//! Authentication and staff management service

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use rand::rngs::OsRng;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        staff::{CreateStaffMember, LoginRequest},
        StaffClaims, StaffMember,
    },
    repository::Repository,
};

/// Hash a password with argon2 and a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate staff by email and return a JWT token
    pub async fn authenticate(&self, form: &LoginRequest) -> AppResult<(String, StaffMember)> {
        form.validate()?;

        let member = self
            .repository
            .staff
            .get_by_email(&form.email)
            .await
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !self.verify_password(&member, &form.password)? {
            tracing::warn!(email = %form.email, "Rejected login attempt");
            return Err(AppError::Authentication("Invalid email or password".to_string()));
        }

        let token = self.create_token_for(&member)?;
        tracing::info!(staff_id = %member.id, role = %member.role, "Staff member logged in");
        Ok((token, member))
    }

    fn create_token_for(&self, member: &StaffMember) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = StaffClaims {
            sub: member.email.clone(),
            staff_id: member.id.clone(),
            name: member.name.clone(),
            role: member.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn verify_password(&self, member: &StaffMember, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&member.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Token validity in seconds
    pub fn token_lifetime_secs(&self) -> i64 {
        self.config.jwt_expiration_hours as i64 * 3600
    }

    pub async fn get_staff(&self, id: &str) -> AppResult<StaffMember> {
        self.repository
            .staff
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    pub async fn list_staff(&self) -> Vec<StaffMember> {
        self.repository.staff.list().await
    }

    /// Validate the staff form and store the new member with a hashed password
    pub async fn create_staff(&self, form: CreateStaffMember) -> AppResult<StaffMember> {
        form.validate()?;

        let member = StaffMember {
            id: String::new(),
            name: form.name,
            email: form.email,
            phone: form.phone,
            role: form.role,
            password_hash: hash_password(&form.password)?,
        };

        let member = self.repository.staff.add(member).await?;
        tracing::info!(staff_id = %member.id, "Staff member created");
        Ok(member)
    }
}
