use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A registered user: an email identity paired with a password hash.
///
/// Created at registration, read at login, never mutated afterwards. The
/// hash never leaves the server, only the email does.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
