//! Axum route handlers for the daily push: today's item and completion.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::info::Info;
use crate::models::push::Push;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub title: String,
    pub summary: String,
    pub suggestion: String,
    pub done: bool,
}

/// GET /api/today/:user_id
///
/// Nothing prevents duplicate pushes for the same (user, date) — repeated
/// ingestion runs create them — so the lookup is pinned to the oldest row
/// of the day to stay deterministic.
pub async fn handle_today(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<TodayResponse>, AppError> {
    let today = Local::now().date_naive();

    let push: Option<Push> = sqlx::query_as(
        "SELECT * FROM pushes WHERE user_id = $1 AND date = $2 ORDER BY id ASC LIMIT 1",
    )
    .bind(user_id)
    .bind(today)
    .fetch_optional(&state.db)
    .await?;

    let push = push.ok_or_else(|| AppError::NotFound("No content yet".to_string()))?;

    // Every push references an existing info; a miss here is a server fault,
    // not a 404.
    let info: Info = sqlx::query_as("SELECT * FROM infos WHERE id = $1")
        .bind(push.info_id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(TodayResponse {
        title: info.title,
        summary: push.summary,
        suggestion: push.suggestion,
        done: push.done,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    pub push_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub status: &'static str,
}

/// POST /api/complete
///
/// Idempotent: completing an already-done push leaves it done.
pub async fn handle_complete(
    State(state): State<AppState>,
    Json(request): Json<CompleteRequest>,
) -> Result<Json<CompleteResponse>, AppError> {
    let result = sqlx::query("UPDATE pushes SET done = TRUE WHERE id = $1")
        .bind(request.push_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    tracing::info!("Push {} marked as done", request.push_id);
    Ok(Json(CompleteResponse { status: "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_response_shape() {
        let value = serde_json::to_value(TodayResponse {
            title: "t".to_string(),
            summary: "s".to_string(),
            suggestion: "g".to_string(),
            done: false,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "title": "t", "summary": "s", "suggestion": "g", "done": false })
        );
    }

    #[test]
    fn test_complete_response_shape() {
        let value = serde_json::to_value(CompleteResponse { status: "ok" }).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok" }));
    }
}
