#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An ingested article. Immutable after insert; per-user summaries live on
/// the push rows that reference it.
#[derive(Debug, Clone, FromRow)]
pub struct Info {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub source: String,
    pub content: String,
    pub fetched_at: DateTime<Utc>,
}
