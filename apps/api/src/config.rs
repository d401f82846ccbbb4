use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    /// Feed URLs to ingest, from the comma-separated RSS_URLS variable.
    pub rss_urls: Vec<String>,
    /// Local hour (0-23) at which the daily ingestion run triggers.
    pub fetch_hour: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let fetch_hour = std::env::var("FETCH_HOUR")
            .unwrap_or_else(|_| "8".to_string())
            .parse::<u32>()
            .context("FETCH_HOUR must be an hour between 0 and 23")?;
        anyhow::ensure!(fetch_hour < 24, "FETCH_HOUR must be between 0 and 23");

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            rss_urls: split_feed_urls(&require_env("RSS_URLS")?),
            fetch_hour,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits the RSS_URLS value on commas, dropping blank segments.
fn split_feed_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect()
}
