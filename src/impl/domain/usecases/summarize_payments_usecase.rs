use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::payments_repository_impl::PaymentsRepositoryImpl,
    domain::{logic::aggregator::aggregate, repositories::payments_repository::PaymentsRepository},
    entities::{PaymentSummary, QueryPeriod},
};

#[async_trait]
pub trait SummarizePaymentsUsecase: Send + Sync {
    async fn summarize(&self, period: &QueryPeriod) -> Result<PaymentSummary, ServerError>;
}

pub(crate) struct SummarizePaymentsUsecaseImpl<
    R1 = PaymentsRepositoryImpl, // Default.
> where
    R1: PaymentsRepository,
{
    payments_repository: Arc<R1>,
}

#[async_trait]
impl<R1> SummarizePaymentsUsecase for SummarizePaymentsUsecaseImpl<R1>
where
    R1: PaymentsRepository,
{
    async fn summarize(&self, period: &QueryPeriod) -> Result<PaymentSummary, ServerError> {
        let records = match period {
            QueryPeriod::Day(day) => self.payments_repository.query_by_date(*day)?,
            QueryPeriod::Month { year, month } => {
                self.payments_repository.query_by_month(*year, *month)?
            }
        };
        Ok(aggregate(&records))
    }
}

impl<R1: PaymentsRepository> SummarizePaymentsUsecaseImpl<R1> {
    pub(crate) fn new(payments_repository: Arc<R1>) -> Self {
        SummarizePaymentsUsecaseImpl {
            payments_repository,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use iso_currency::Currency;

    use super::*;
    use crate::entities::{
        ChatId, MessageId, NewPaymentRecord, ParsedPayment, PaymentRecord,
    };

    #[tokio::test]
    async fn stored_totals_match_in_memory_aggregation() {
        let repo = Arc::new(PaymentsRepositoryImpl::open_in_memory().unwrap());
        let start = NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let mut stored: Vec<PaymentRecord> = Vec::new();
        for i in 0..40i64 {
            let currency = if i % 3 == 0 { Currency::KHR } else { Currency::USD };
            let amount = if currency == Currency::KHR {
                (i * 1000) as f64
            } else {
                i as f64 + 0.25
            };
            stored.push(
                repo.append(NewPaymentRecord {
                    source_chat_id: ChatId(1),
                    source_message_id: MessageId(i),
                    payment: ParsedPayment {
                        amount,
                        currency,
                        // Spread over the month, several per day.
                        paid_at: start + Duration::hours(17 * i),
                    },
                    raw_text: String::new(),
                })
                .unwrap(),
            );
        }

        let usecase = SummarizePaymentsUsecaseImpl::new(repo);
        let summary = usecase
            .summarize(&QueryPeriod::month(2025, 12).unwrap())
            .await
            .unwrap();
        assert_eq!(summary, aggregate(&stored));
        assert_eq!(summary.transaction_count(), 40);
    }

    #[tokio::test]
    async fn empty_period_gives_empty_summary() {
        let repo = Arc::new(PaymentsRepositoryImpl::open_in_memory().unwrap());
        let summary = SummarizePaymentsUsecaseImpl::new(repo)
            .summarize(&QueryPeriod::Day(NaiveDate::from_ymd_opt(2025, 12, 11).unwrap()))
            .await
            .unwrap();
        assert!(summary.is_empty());
    }
}
