#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered user. Created via /api/register, never updated or deleted.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub profession: String,
    pub field: Option<String>,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}
