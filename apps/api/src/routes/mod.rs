pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pushes::handlers as push_handlers;
use crate::state::AppState;
use crate::users::handlers as user_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/register", post(user_handlers::handle_register))
        .route("/api/today/:user_id", get(push_handlers::handle_today))
        .route("/api/complete", post(push_handlers::handle_complete))
        .with_state(state)
}
