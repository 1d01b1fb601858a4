use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::payments_repository_impl::PaymentsRepositoryImpl,
    domain::{
        logic::payment_text_parser::PaymentTextParser,
        repositories::payments_repository::PaymentsRepository,
    },
    entities::{InboundMessage, NewPaymentRecord, PaymentRecord},
};

#[async_trait]
pub trait IngestPaymentUsecase: Send + Sync {
    /// Parses the message text and stores the payment it describes. Returns
    /// `None`, without touching the store, when the text is not a complete
    /// payment notification.
    async fn ingest(&self, message: &InboundMessage)
        -> Result<Option<PaymentRecord>, ServerError>;
}

pub(crate) struct IngestPaymentUsecaseImpl<
    R1 = PaymentsRepositoryImpl, // Default.
> where
    R1: PaymentsRepository,
{
    payments_repository: Arc<R1>,
    parser: PaymentTextParser,
}

#[async_trait]
impl<R1> IngestPaymentUsecase for IngestPaymentUsecaseImpl<R1>
where
    R1: PaymentsRepository,
{
    async fn ingest(
        &self,
        message: &InboundMessage,
    ) -> Result<Option<PaymentRecord>, ServerError> {
        let Some(payment) = self.parser.parse(&message.text) else {
            return Ok(None);
        };
        let record = self.payments_repository.append(NewPaymentRecord {
            source_chat_id: message.chat_id,
            source_message_id: message.message_id,
            payment,
            raw_text: message.text.clone(),
        })?;
        Ok(Some(record))
    }
}

impl<R1: PaymentsRepository> IngestPaymentUsecaseImpl<R1> {
    pub(crate) fn new(payments_repository: Arc<R1>, parser: PaymentTextParser) -> Self {
        IngestPaymentUsecaseImpl {
            payments_repository,
            parser,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use iso_currency::Currency;

    use super::*;
    use crate::entities::{ChatId, MessageId};

    const USD_TEXT: &str = "Received  26.00 USD from POV TEAB,Wing Bank (Cambodia) Plc by KHQR,on 11-Dec-2025 03:46PM, at SNC shop by SN  (Hash. b818c4e3).";

    fn usecase() -> (Arc<PaymentsRepositoryImpl>, IngestPaymentUsecaseImpl) {
        let repo = Arc::new(PaymentsRepositoryImpl::open_in_memory().unwrap());
        let usecase = IngestPaymentUsecaseImpl::new(repo.clone(), PaymentTextParser::default());
        (repo, usecase)
    }

    #[tokio::test]
    async fn stores_parsed_payment_with_raw_text() {
        let (repo, usecase) = usecase();
        let message = InboundMessage::new(ChatId(-100), MessageId(7), USD_TEXT);
        let record = usecase.ingest(&message).await.unwrap().unwrap();
        assert_eq!(record.amount, 26.0);
        assert_eq!(record.currency, Currency::USD);
        assert_eq!(record.source_chat_id, ChatId(-100));
        assert_eq!(record.source_message_id, MessageId(7));
        assert_eq!(record.raw_text, USD_TEXT);

        let stored = repo
            .query_by_date(NaiveDate::from_ymd_opt(2025, 12, 11).unwrap())
            .unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[tokio::test]
    async fn partial_match_stores_nothing() {
        let (repo, usecase) = usecase();
        let message = InboundMessage::new(
            ChatId(-100),
            MessageId(8),
            "Received 26.00 USD from POV TEAB, date unknown",
        );
        assert_eq!(usecase.ingest(&message).await.unwrap(), None);
        assert_eq!(repo.count().unwrap(), 0);
    }
}
