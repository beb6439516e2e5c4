use async_trait::async_trait;

use super::User;
use crate::shared::DomainResult;

/// Persistence for user records.
///
/// Implementations must reject a second record with an existing username
/// by returning [`DomainError::DuplicateUsername`](crate::shared::DomainError::DuplicateUsername),
/// even when two inserts race.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create_user(&self, user: User) -> DomainResult<User>;

    async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>>;
}
