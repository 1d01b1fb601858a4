use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::{
    entities::{Clock, QueryPeriod},
    presentation::report_handler::ReportHandler,
};

/// First occurrence of `at` strictly after `now`.
pub fn next_run_after(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    let same_day = now.date().and_time(at);
    if same_day > now {
        same_day
    } else {
        same_day + Duration::days(1)
    }
}

/// Publishes the summary of the current day every day at `at` (local time of
/// `clock`). Runs until the returned task is aborted.
///
/// The wall clock is read again after every sleep: if it was set back (DST,
/// manual adjustment) the task goes back to sleep instead of publishing early,
/// and a day that was already published is never published twice.
pub(crate) fn spawn_daily_summary(
    reports: Arc<ReportHandler>,
    clock: Arc<dyn Clock>,
    at: NaiveTime,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last_published = None;
        loop {
            let now = clock.now();
            let next = next_run_after(now, at);
            info!(next_run = %next, "daily summary scheduled");
            let wait = (next - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            let woke = clock.now();
            if woke < next {
                debug!(next_run = %next, now = %woke, "woke before scheduled time");
                continue;
            }
            let day = next.date();
            if last_published == Some(day) {
                debug!(day = %day, "daily summary already published");
                continue;
            }

            let period = QueryPeriod::Day(day);
            if let Err(e) = reports.publish(&period).await {
                error!(period = ?period, error = ?e, "scheduled summary failed");
            }
            last_published = Some(day);
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use tokio::time::Instant;

    use super::*;
    use crate::{
        data::repositories::payments_repository_impl::PaymentsRepositoryImpl,
        domain::usecases::summarize_payments_usecase::SummarizePaymentsUsecaseImpl,
        entities::ChatId,
        ext::standard_sinks::RecordingSink,
    };

    /// Wall clock driven by tokio's (paused) time, with an adjustable offset.
    struct TestClock {
        base: NaiveDateTime,
        started: Instant,
        shift: Mutex<Duration>,
    }

    impl TestClock {
        fn new(base: NaiveDateTime) -> Self {
            Self {
                base,
                started: Instant::now(),
                shift: Mutex::new(Duration::zero()),
            }
        }

        fn set_back(&self, by: Duration) {
            *self.shift.lock().unwrap() = -by;
        }
    }

    impl Clock for TestClock {
        fn now(&self) -> NaiveDateTime {
            let elapsed = Duration::from_std(self.started.elapsed()).unwrap();
            self.base + elapsed + *self.shift.lock().unwrap()
        }
    }

    fn reports(sink: Arc<RecordingSink>) -> Arc<ReportHandler> {
        let repo = Arc::new(PaymentsRepositoryImpl::open_in_memory().unwrap());
        Arc::new(ReportHandler::new(
            ChatId(-500),
            Arc::new(SummarizePaymentsUsecaseImpl::new(repo)),
            sink,
        ))
    }

    fn minutes(m: u64) -> std::time::Duration {
        std::time::Duration::from_secs(m * 60)
    }

    fn empty_day(day: &str) -> String {
        format!("Daily summary for {}\nNo payments recorded.", day)
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn next_run_is_later_today_or_tomorrow() {
        assert_eq!(next_run_after(at(11, 8, 0), time(21, 0)), at(11, 21, 0));
        assert_eq!(next_run_after(at(11, 21, 0), time(21, 0)), at(12, 21, 0));
        assert_eq!(next_run_after(at(11, 22, 30), time(21, 0)), at(12, 21, 0));
        assert_eq!(next_run_after(at(31, 23, 59), time(0, 0)), {
            NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        });
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_when_the_time_comes() {
        let sink = Arc::new(RecordingSink::new());
        let clock = Arc::new(TestClock::new(at(11, 20, 0)));

        let task = spawn_daily_summary(reports(sink.clone()), clock, time(21, 0));
        tokio::time::sleep(minutes(30)).await;
        assert!(sink.sent().is_empty());

        tokio::time::sleep(minutes(31)).await;
        assert_eq!(sink.sent_to(ChatId(-500)), vec![empty_day("2025-12-11")]);

        tokio::time::sleep(minutes(24 * 60)).await;
        assert_eq!(
            sink.sent_to(ChatId(-500)),
            vec![empty_day("2025-12-11"), empty_day("2025-12-12")]
        );
        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn clock_set_back_neither_publishes_early_nor_twice() {
        let sink = Arc::new(RecordingSink::new());
        let clock = Arc::new(TestClock::new(at(11, 20, 0)));

        let task = spawn_daily_summary(reports(sink.clone()), clock.clone(), time(21, 0));
        tokio::time::sleep(minutes(61)).await;
        assert_eq!(sink.sent_to(ChatId(-500)), vec![empty_day("2025-12-11")]);

        // After the next full-day sleep the wall clock reads 2025-12-11 20:30.
        clock.set_back(Duration::hours(24) + Duration::minutes(30));
        tokio::time::sleep(minutes(25 * 60)).await;
        assert_eq!(sink.sent_to(ChatId(-500)), vec![empty_day("2025-12-11")]);

        tokio::time::sleep(minutes(24 * 60)).await;
        assert_eq!(
            sink.sent_to(ChatId(-500)),
            vec![empty_day("2025-12-11"), empty_day("2025-12-12")]
        );
        task.abort();
    }
}
