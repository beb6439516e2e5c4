//! In-memory user storage

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, User, UserRepositoryInterface};

/// In-memory user store for development and testing.
///
/// Records are keyed by username; the entry API makes the
/// existence check and the insert a single step.
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn create_user(&self, user: User) -> DomainResult<User> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(DomainError::DuplicateUsername),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self.users.get(username).map(|u| u.clone()))
    }
}
