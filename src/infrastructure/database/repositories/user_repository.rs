use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, User, UserRepositoryInterface};
use crate::infrastructure::database::entities::user;
use crate::shared::InfraError;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        username: model.username,
        password_hash: model.password_hash,
        email: model.email,
        phone: model.phone,
        created_at: model.created_at,
    }
}

fn db_err(e: DbErr) -> DomainError {
    InfraError::from(e).into()
}

fn insert_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateUsername,
        _ => db_err(e),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: User) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            id: Set(dto.id),
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            username: Set(dto.username),
            password_hash: Set(dto.password_hash),
            email: Set(dto.email),
            phone: Set(dto.phone),
            created_at: Set(dto.created_at),
        };

        let model = new_user.insert(&self.db).await.map_err(insert_err)?;
        debug!(user_id = %model.id, "User row inserted");

        Ok(user_model_to_domain(model))
    }

    async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }
}
