#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::FromRow;

/// A daily assignment of one info to one user, with the user-tailored
/// summary and suggestion and a completion flag.
#[derive(Debug, Clone, FromRow)]
pub struct Push {
    pub id: i64,
    pub date: NaiveDate,
    pub user_id: i64,
    pub info_id: i64,
    pub summary: String,
    pub suggestion: String,
    pub pushed: bool,
    pub done: bool,
}
