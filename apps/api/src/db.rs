use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the three tables on first boot. Idempotent; there is no
/// migration mechanism.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         BIGSERIAL PRIMARY KEY,
            profession TEXT NOT NULL,
            field      TEXT,
            contact    TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS infos (
            id         BIGSERIAL PRIMARY KEY,
            title      TEXT NOT NULL,
            url        TEXT NOT NULL,
            source     TEXT NOT NULL,
            content    TEXT NOT NULL,
            fetched_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Summary/suggestion are stored here, per user. The shared info row is
    // immutable after insert. The ingestion job always binds `date` from the
    // application clock; the column default only covers manual inserts.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pushes (
            id         BIGSERIAL PRIMARY KEY,
            date       DATE NOT NULL DEFAULT CURRENT_DATE,
            user_id    BIGINT NOT NULL REFERENCES users(id),
            info_id    BIGINT NOT NULL REFERENCES infos(id),
            summary    TEXT NOT NULL DEFAULT '',
            suggestion TEXT NOT NULL DEFAULT '',
            pushed     BOOLEAN NOT NULL DEFAULT FALSE,
            done       BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}
