use anyhow::Result;
use chrono::{Local, NaiveDate};
use sqlx::PgPool;
use tracing::info;

use crate::ingestion::feed::{self, FetchedEntry};
use crate::models::user::User;
use crate::state::AppState;
use crate::summarizer;

#[derive(Debug, Default)]
pub struct IngestionStats {
    pub infos: usize,
    pub pushes: usize,
}

/// The writes one feed's entries imply: one info per entry, one push per
/// (entry, user) pair. Built before any database write.
///
/// The date comes from the application clock — the same clock the today
/// lookup uses — never from the database session, so the two can never
/// disagree across timezones.
#[derive(Debug)]
struct BatchPlan<'a> {
    date: NaiveDate,
    items: Vec<BatchItem<'a>>,
}

#[derive(Debug)]
struct BatchItem<'a> {
    entry: &'a FetchedEntry,
    recipients: &'a [User],
}

impl BatchPlan<'_> {
    fn info_count(&self) -> usize {
        self.items.len()
    }

    fn push_count(&self) -> usize {
        self.items.iter().map(|item| item.recipients.len()).sum()
    }
}

fn plan_batch<'a>(entries: &'a [FetchedEntry], users: &'a [User], date: NaiveDate) -> BatchPlan<'a> {
    BatchPlan {
        date,
        items: entries
            .iter()
            .map(|entry| BatchItem {
                entry,
                recipients: users,
            })
            .collect(),
    }
}

/// One full ingestion run: every configured feed, the first three entries of
/// each, one push per (entry, user) pair. The user set is fixed at job
/// start; users registering mid-run get their first push the next day.
///
/// Any fetch, parse, database, or LLM failure aborts the run. The scheduler
/// logs the error and waits for the next trigger; there is no partial-run
/// retry.
pub async fn run(state: &AppState) -> Result<IngestionStats> {
    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY id")
        .fetch_all(&state.db)
        .await?;
    info!(
        "Ingestion run started: {} feeds, {} users",
        state.config.rss_urls.len(),
        users.len()
    );

    let run_date = Local::now().date_naive();
    let client = feed::http_client();
    let mut stats = IngestionStats::default();

    for url in &state.config.rss_urls {
        let entries = feed::fetch_feed(&client, url).await?;
        let batch = plan_batch(&entries, &users, run_date);

        for item in &batch.items {
            let info_id = insert_info(&state.db, item.entry).await?;
            stats.infos += 1;

            for user in item.recipients {
                let advice = summarizer::summarize_for_profession(
                    &state.llm,
                    &user.profession,
                    &item.entry.title,
                    &item.entry.content,
                )
                .await?;
                insert_push(
                    &state.db,
                    batch.date,
                    user.id,
                    info_id,
                    &advice.summary,
                    &advice.suggestion,
                )
                .await?;
                stats.pushes += 1;
            }

            info!(
                "Ingested info {info_id} ({:?}) for {} users",
                item.entry.title,
                item.recipients.len()
            );
        }
    }

    Ok(stats)
}

async fn insert_info(db: &PgPool, entry: &FetchedEntry) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO infos (title, url, source, content) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&entry.title)
    .bind(&entry.url)
    .bind(&entry.source)
    .bind(&entry.content)
    .fetch_one(db)
    .await?;
    Ok(id)
}

async fn insert_push(
    db: &PgPool,
    date: NaiveDate,
    user_id: i64,
    info_id: i64,
    summary: &str,
    suggestion: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO pushes (date, user_id, info_id, summary, suggestion) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(date)
    .bind(user_id)
    .bind(info_id)
    .bind(summary)
    .bind(suggestion)
    .execute(db)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(n: u32) -> FetchedEntry {
        FetchedEntry {
            title: format!("Article {n}"),
            url: format!("https://career.example/{n}"),
            source: "Career Weekly".to_string(),
            content: format!("Body {n}"),
        }
    }

    fn user(id: i64, profession: &str) -> User {
        User {
            id,
            profession: profession.to_string(),
            field: None,
            contact: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_plan_batch_three_entries_two_users() {
        let entries = vec![entry(1), entry(2), entry(3)];
        let users = vec![user(1, "nurse"), user(2, "data engineer")];
        let batch = plan_batch(&entries, &users, Local::now().date_naive());

        assert_eq!(batch.info_count(), 3);
        assert_eq!(batch.push_count(), 6);
        for item in &batch.items {
            assert_eq!(item.recipients.len(), 2);
        }
    }

    #[test]
    fn test_plan_batch_no_users_still_ingests_infos() {
        let entries = vec![entry(1), entry(2), entry(3)];
        let batch = plan_batch(&entries, &[], Local::now().date_naive());

        assert_eq!(batch.info_count(), 3);
        assert_eq!(batch.push_count(), 0);
    }

    #[test]
    fn test_plan_batch_dates_with_the_given_clock() {
        let entries = vec![entry(1)];
        let users = vec![user(1, "teacher")];
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let batch = plan_batch(&entries, &users, date);

        assert_eq!(batch.date, date);
    }
}
