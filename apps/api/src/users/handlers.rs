//! Axum route handlers for user registration.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Optional at the deserialization layer so a missing field yields a
    /// clean 400 instead of a body-rejection fault; validated below.
    pub profession: Option<String>,
    pub field: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub user_id: i64,
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let profession = request
        .profession
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("profession is required".to_string()))?;

    let (user_id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (profession, field, contact) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(profession)
    .bind(&request.field)
    .bind(&request.contact)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("New user registered: {user_id}, profession: {profession}");
    Ok(Json(RegisterResponse {
        status: "ok",
        user_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_shape() {
        let value = serde_json::to_value(RegisterResponse {
            status: "ok",
            user_id: 7,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok", "user_id": 7 }));
    }

    #[test]
    fn test_register_request_accepts_profession_only() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"profession": "nurse"}"#).unwrap();
        assert_eq!(request.profession.as_deref(), Some("nurse"));
        assert!(request.field.is_none());
        assert!(request.contact.is_none());
    }

    #[test]
    fn test_register_request_tolerates_missing_profession() {
        // Deserialization must not reject; the handler turns this into a 400.
        let request: RegisterRequest = serde_json::from_str(r#"{"field": "oncology"}"#).unwrap();
        assert!(request.profession.is_none());
    }
}
