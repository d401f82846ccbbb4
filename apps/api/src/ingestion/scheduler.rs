use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::{error, info};

use crate::ingestion::job;
use crate::state::AppState;

/// Background task that runs one ingestion per day at the configured hour.
///
/// A failed run is logged and dropped; the loop sleeps until the next
/// trigger regardless of outcome.
pub async fn run_daily(state: AppState) {
    info!(
        "Ingestion scheduled daily at {:02}:00 local time",
        state.config.fetch_hour
    );

    loop {
        let wait = until_next_run(Local::now().naive_local(), state.config.fetch_hour);
        info!("Next ingestion run in {}s", wait.as_secs());
        tokio::time::sleep(wait).await;

        match job::run(&state).await {
            Ok(stats) => info!(
                "Ingestion run complete: {} infos, {} pushes",
                stats.infos, stats.pushes
            ),
            Err(e) => error!("Ingestion run failed: {e:#}"),
        }
    }
}

/// Duration from `now` to the next occurrence of `hour`:00. An exact hit on
/// the trigger time schedules the following day, so a run never fires twice.
fn until_next_run(now: NaiveDateTime, hour: u32) -> Duration {
    let today = now
        .date()
        .and_hms_opt(hour, 0, 0)
        .expect("fetch hour is validated at startup");
    let next = if today > now {
        today
    } else {
        today + chrono::Duration::days(1)
    };
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_until_next_run_later_today() {
        assert_eq!(until_next_run(at(7, 0), 8), Duration::from_secs(3600));
    }

    #[test]
    fn test_until_next_run_exact_hour_waits_a_day() {
        assert_eq!(until_next_run(at(8, 0), 8), Duration::from_secs(24 * 3600));
    }

    #[test]
    fn test_until_next_run_wraps_to_tomorrow() {
        assert_eq!(
            until_next_run(at(9, 30), 8),
            Duration::from_secs(22 * 3600 + 30 * 60)
        );
    }
}
