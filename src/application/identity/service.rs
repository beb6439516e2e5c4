//! Account service: registration and login orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::user::validation::{present, validate_registration};
use crate::domain::{
    DomainError, DomainResult, LoginDto, RegisterUserDto, User, UserRepositoryInterface,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::InfraError;

/// Account service shared by the HTTP layer, with the store chosen at startup.
pub type SharedAccountService = Arc<AccountService<dyn UserRepositoryInterface>>;

/// Account service: the login and register use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct AccountService<R: UserRepositoryInterface + ?Sized> {
    repo: Arc<R>,
    bcrypt_cost: u32,
}

impl<R: UserRepositoryInterface + ?Sized> AccountService<R> {
    pub fn new(repo: Arc<R>, bcrypt_cost: u32) -> Self {
        Self { repo, bcrypt_cost }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Check a username/password pair and return the stored record.
    pub async fn login(&self, dto: LoginDto) -> DomainResult<User> {
        let (Some(username), Some(password)) = (present(&dto.username), present(&dto.password))
        else {
            return Err(DomainError::MissingCredentials);
        };

        let Some(user) = self.repo.get_user_by_username(username).await? else {
            warn!(username, "Login for unknown user");
            return Err(DomainError::NotFound);
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            warn!(username, "Login with wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        info!(user_id = %user.id, username, "User logged in");
        Ok(user)
    }

    // ── Registration ────────────────────────────────────────────

    /// Validate the submission, reject taken usernames, and store the record.
    pub async fn register(&self, dto: RegisterUserDto) -> DomainResult<User> {
        let new_user = validate_registration(dto).map_err(|e| {
            debug!(reason = %e, "Registration rejected");
            DomainError::Validation(e)
        })?;

        if self
            .repo
            .get_user_by_username(&new_user.username)
            .await?
            .is_some()
        {
            warn!(username = %new_user.username, "Registration for taken username");
            return Err(DomainError::DuplicateUsername);
        }

        let password_hash =
            hash_password(&new_user.password, self.bcrypt_cost).map_err(InfraError::from)?;

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            username: new_user.username,
            password_hash,
            email: new_user.email,
            phone: new_user.phone,
            created_at: Utc::now(),
        };

        let user = self.repo.create_user(user).await?;

        info!(user_id = %user.id, username = %user.username, "New user registered");
        Ok(user)
    }
}
