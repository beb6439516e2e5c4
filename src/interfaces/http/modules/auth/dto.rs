//! Authentication DTOs
//!
//! Request fields are optional so that a missing field reaches the account
//! service and gets its field-specific message instead of a JSON rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{LoginDto, RegisterUserDto, User};

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginDto {
    fn from(r: LoginRequest) -> Self {
        Self {
            username: r.username,
            password: r.password,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<RegisterRequest> for RegisterUserDto {
    fn from(r: RegisterRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            username: r.username,
            password: r.password,
            email: r.email,
            phone: r.phone,
        }
    }
}

/// The full stored user record, as returned by login and register.
///
/// `password` carries the stored credential (a bcrypt hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserRecord {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            username: u.username,
            password: u.password_hash,
            email: u.email,
            phone: u.phone,
            created_at: u.created_at,
        }
    }
}
