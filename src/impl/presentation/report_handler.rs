use std::{str::FromStr as _, sync::Arc};

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::{debug, info};

use crate::{
    data::models::query_period_model::{DayArgumentModel, MonthArgumentModel},
    entities::{ChatId, QueryPeriod, ReportSink},
    presentation::{
        summary_fmt::{format_summary, period_label},
        utils::deliver,
    },
    usecases::SummarizePaymentsUsecase,
};

pub(crate) const DAILY_USAGE: &str = "Usage: /summary [YYYY-MM-DD]";
pub(crate) const MONTHLY_USAGE: &str = "Usage: /month [YYYY-MM]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportOutcome {
    /// Report text that was handed to the summary sink.
    Published(String),
    /// The argument was malformed; nothing was queried.
    Usage(&'static str),
}

/// Computes summaries and publishes them to the summary chat.
pub(crate) struct ReportHandler {
    summary_chat_id: ChatId,
    summarize_usecase: Arc<dyn SummarizePaymentsUsecase>,
    sink: Arc<dyn ReportSink>,
}

impl ReportHandler {
    pub(crate) fn new(
        summary_chat_id: ChatId,
        summarize_usecase: Arc<dyn SummarizePaymentsUsecase>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            summary_chat_id,
            summarize_usecase,
            sink,
        }
    }

    pub(crate) async fn publish(&self, period: &QueryPeriod) -> Result<String, ServerError> {
        let summary = self.summarize_usecase.summarize(period).await?;
        let text = format_summary(&period_label(period), &summary);
        info!(
            period = ?period,
            transactions = summary.transaction_count(),
            "publishing payment summary"
        );
        deliver(self.sink.as_ref(), self.summary_chat_id, &text).await;
        Ok(text)
    }

    /// Day report for `arg` (`YYYY-MM-DD`), or for `today` without argument.
    pub(crate) async fn daily(
        &self,
        arg: Option<&str>,
        today: NaiveDate,
    ) -> Result<ReportOutcome, ServerError> {
        let period: QueryPeriod = match arg {
            None => QueryPeriod::Day(today),
            Some(arg) => match DayArgumentModel::from_str(arg) {
                Ok(day) => day.into(),
                Err(e) => {
                    debug!(error = ?e, "malformed day argument");
                    return Ok(ReportOutcome::Usage(DAILY_USAGE));
                }
            },
        };
        self.publish(&period).await.map(ReportOutcome::Published)
    }

    /// Month report for `arg` (`YYYY-MM`), or for the month of `today`.
    pub(crate) async fn monthly(
        &self,
        arg: Option<&str>,
        today: NaiveDate,
    ) -> Result<ReportOutcome, ServerError> {
        let period: QueryPeriod = match arg {
            None => QueryPeriod::month_of(today),
            Some(arg) => match MonthArgumentModel::from_str(arg) {
                Ok(month) => month.into(),
                Err(e) => {
                    debug!(error = ?e, "malformed month argument");
                    return Ok(ReportOutcome::Usage(MONTHLY_USAGE));
                }
            },
        };
        self.publish(&period).await.map(ReportOutcome::Published)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use iso_currency::Currency;

    use super::*;
    use crate::{
        data::repositories::payments_repository_impl::PaymentsRepositoryImpl,
        domain::{
            repositories::payments_repository::PaymentsRepository,
            usecases::summarize_payments_usecase::SummarizePaymentsUsecaseImpl,
        },
        entities::{MessageId, NewPaymentRecord, ParsedPayment},
        ext::standard_sinks::RecordingSink,
    };

    const SUMMARY_CHAT: ChatId = ChatId(-500);

    fn handler(sink: Arc<RecordingSink>) -> (Arc<PaymentsRepositoryImpl>, ReportHandler) {
        let repo = Arc::new(PaymentsRepositoryImpl::open_in_memory().unwrap());
        let usecase = SummarizePaymentsUsecaseImpl::new(repo.clone());
        (repo, ReportHandler::new(SUMMARY_CHAT, Arc::new(usecase), sink))
    }

    fn store(repo: &PaymentsRepositoryImpl, amount: f64, currency: Currency, paid_at: &str) {
        repo.append(NewPaymentRecord {
            source_chat_id: ChatId(-100),
            source_message_id: MessageId(1),
            payment: ParsedPayment {
                amount,
                currency,
                paid_at: NaiveDateTime::parse_from_str(paid_at, "%Y-%m-%d %H:%M").unwrap(),
            },
            raw_text: String::new(),
        })
        .unwrap();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 11).unwrap()
    }

    #[tokio::test]
    async fn daily_defaults_to_today() {
        let sink = Arc::new(RecordingSink::new());
        let (repo, handler) = handler(sink.clone());
        store(&repo, 26.0, Currency::USD, "2025-12-11 15:46");
        store(&repo, 801000.0, Currency::KHR, "2025-12-11 15:03");
        store(&repo, 5.0, Currency::USD, "2025-12-10 09:00");

        let outcome = handler.daily(None, today()).await.unwrap();
        let expected = "Daily summary for 2025-12-11\nKHR: 801,000.00 (1 transaction)\nUSD: 26.00 (1 transaction)";
        assert_eq!(outcome, ReportOutcome::Published(expected.to_string()));
        assert_eq!(sink.sent_to(SUMMARY_CHAT), vec![expected.to_string()]);
    }

    #[tokio::test]
    async fn monthly_with_argument_covers_whole_month() {
        let sink = Arc::new(RecordingSink::new());
        let (repo, handler) = handler(sink.clone());
        store(&repo, 10.0, Currency::USD, "2025-11-01 00:00");
        store(&repo, 20.0, Currency::USD, "2025-11-30 23:59");
        store(&repo, 99.0, Currency::USD, "2025-12-01 00:00");

        let outcome = handler.monthly(Some("2025-11"), today()).await.unwrap();
        assert_eq!(
            outcome,
            ReportOutcome::Published(
                "Monthly summary for 2025-11\nUSD: 30.00 (2 transactions)".to_string()
            )
        );
    }

    #[tokio::test]
    async fn empty_month_reports_no_payments() {
        let sink = Arc::new(RecordingSink::new());
        let (_repo, handler) = handler(sink.clone());
        handler.monthly(None, today()).await.unwrap();
        assert_eq!(
            sink.sent_to(SUMMARY_CHAT),
            vec!["Monthly summary for 2025-12\nNo payments recorded.".to_string()]
        );
    }

    #[tokio::test]
    async fn malformed_argument_returns_usage_without_publishing() {
        let sink = Arc::new(RecordingSink::new());
        let (_repo, handler) = handler(sink.clone());
        assert_eq!(
            handler.daily(Some("11/12/2025"), today()).await.unwrap(),
            ReportOutcome::Usage(DAILY_USAGE)
        );
        assert_eq!(
            handler.monthly(Some("2025-13"), today()).await.unwrap(),
            ReportOutcome::Usage(MONTHLY_USAGE)
        );
        assert!(sink.sent().is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        let sink = Arc::new(RecordingSink::failing());
        let (repo, handler) = handler(sink.clone());
        store(&repo, 26.0, Currency::USD, "2025-12-11 15:46");
        let outcome = handler.daily(None, today()).await.unwrap();
        assert!(matches!(outcome, ReportOutcome::Published(_)));
        assert!(sink.sent().is_empty());
    }
}
