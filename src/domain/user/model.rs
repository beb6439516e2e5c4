use chrono::{DateTime, Utc};

/// A registered studio member.
///
/// `password_hash` is the stored credential. Records are created by
/// registration and only ever read back by username.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}
