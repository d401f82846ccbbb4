use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state, constructed once in `main` and injected into
/// route handlers via Axum extractors and into the ingestion task by clone.
/// No process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub config: Config,
}
